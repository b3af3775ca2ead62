//! Breakpoint, container query and media-feature utilities.

use crate::error::Error;

/// Breakpoints beyond the standard `sm`..`2xl` set.
pub const CUSTOM_BREAKPOINTS: &str = r#"@theme {
  --breakpoint-3xl: 100rem;
  --breakpoint-4xl: 120rem;

  --breakpoint-tablet: 640px;
  --breakpoint-laptop: 1024px;
  --breakpoint-desktop: 1280px;
  --breakpoint-wide: 1536px;
}
"#;

pub const CONTAINER_QUERIES: &str = r#"@utility container-sm {
  container-type: inline-size;
  container-name: sm;
}

@utility container-md {
  container-type: inline-size;
  container-name: md;
}

@utility container-lg {
  container-type: inline-size;
  container-name: lg;
}

@utility container-xl {
  container-type: inline-size;
  container-name: xl;
}

@utility container-2xl {
  container-type: inline-size;
  container-name: 2xl;
}
"#;

pub const PRINT_UTILITIES: &str = r#"@utility print-hidden {
  @media print {
    display: none !important;
  }
}

@utility print-only {
  display: none !important;

  @media print {
    display: block !important;
  }
}

@utility print-text-black {
  @media print {
    color: black !important;
    background-color: white !important;
  }
}

@utility print-break-after-always {
  page-break-after: always;
}

@utility print-break-avoid {
  page-break-inside: avoid;
}
"#;

pub const REDUCED_MOTION: &str = r#"@utility motion-safe {
  @media (prefers-reduced-motion: no-preference) {
    @apply animate-spin;
  }
}

@utility motion-reduce {
  @media (prefers-reduced-motion: reduce) {
    animation: none !important;
    transition: none !important;
  }
}
"#;

pub const HIGH_CONTRAST: &str = r#"@utility high-contrast {
  @media (prefers-contrast: more) {
    @apply border-2 border-current;
  }
}

@utility forced-colors {
  @media (forced-colors: active) {
    @apply border-2 border-current;
  }
}
"#;

/// Aspect ratios beyond the standard `square`/`video` pair.
pub const ASPECT_RATIOS: &str = r#"@utility aspect-video {
  aspect-ratio: 16 / 9;
}

@utility aspect-photo {
  aspect-ratio: 4 / 3;
}

@utility aspect-portrait {
  aspect-ratio: 3 / 4;
}

@utility aspect-cinema {
  aspect-ratio: 21 / 9;
}

@utility aspect-golden {
  aspect-ratio: 1.618 / 1;
}
"#;

/// Safe-area spacing tokens and padding utilities for notched devices.
pub const SAFE_AREA_INSETS: &str = r#"@theme {
  --spacing-safe-top: env(safe-area-inset-top);
  --spacing-safe-right: env(safe-area-inset-right);
  --spacing-safe-bottom: env(safe-area-inset-bottom);
  --spacing-safe-left: env(safe-area-inset-left);
}

@utility safe-top {
  padding-top: env(safe-area-inset-top);
}

@utility safe-right {
  padding-right: env(safe-area-inset-right);
}

@utility safe-bottom {
  padding-bottom: env(safe-area-inset-bottom);
}

@utility safe-left {
  padding-left: env(safe-area-inset-left);
}

@utility safe-all {
  padding: env(safe-area-inset-top) env(safe-area-inset-right) env(safe-area-inset-bottom) env(safe-area-inset-left);
}
"#;

/// Renders all breakpoint fragments in declaration order.
pub fn breakpoints_plugin() -> Result<String, Error> {
    crate::render::render(crate::render::Plugin::Breakpoints)
}
