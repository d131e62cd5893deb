//! Platform screen queries.
//!
//! The mapper never talks to a windowing system directly. Hosts implement
//! [`ScreenProvider`] and report the safe area, resolution, and window size
//! they currently observe.

use std::sync::Arc;

use parking_lot::RwLock;
use safezone_shared::{Rect, Resolution};
use serde::{Deserialize, Serialize};

use crate::config::DeviceProfile;

/// Operating system family reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS / iPadOS.
    Ios,
    /// Android.
    Android,
    /// Desktop operating systems.
    #[default]
    Desktop,
    /// Browser builds.
    Web,
}

impl Platform {
    /// Returns true for platforms that report hardware cutouts.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Ios | Self::Android)
    }
}

/// Where the normalization resolution comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Physical device: trust the platform's current resolution.
    #[default]
    Device,
    /// Editor or device simulator: use the window client size.
    ///
    /// Simulators change the effective display without updating the
    /// current-resolution query, which may report the host monitor.
    Simulator,
}

impl Environment {
    /// Returns the resolution the safe area should be normalized against.
    #[must_use]
    pub fn effective_resolution<S: ScreenProvider + ?Sized>(self, screen: &S) -> Resolution {
        match self {
            Self::Device => screen.current_resolution(),
            Self::Simulator => screen.window_size(),
        }
    }
}

/// Read-only view of the host's display state.
pub trait ScreenProvider {
    /// Safe rectangle in absolute pixels.
    fn safe_area(&self) -> Rect;

    /// Resolution the platform reports for the display.
    fn current_resolution(&self) -> Resolution;

    /// Client size of the window hosting the UI.
    fn window_size(&self) -> Resolution;

    /// Platform the host is running on.
    fn platform(&self) -> Platform {
        Platform::Desktop
    }
}

impl<P: ScreenProvider + ?Sized> ScreenProvider for &P {
    fn safe_area(&self) -> Rect {
        (**self).safe_area()
    }

    fn current_resolution(&self) -> Resolution {
        (**self).current_resolution()
    }

    fn window_size(&self) -> Resolution {
        (**self).window_size()
    }

    fn platform(&self) -> Platform {
        (**self).platform()
    }
}

impl<P: ScreenProvider + ?Sized> ScreenProvider for Arc<P> {
    fn safe_area(&self) -> Rect {
        (**self).safe_area()
    }

    fn current_resolution(&self) -> Resolution {
        (**self).current_resolution()
    }

    fn window_size(&self) -> Resolution {
        (**self).window_size()
    }

    fn platform(&self) -> Platform {
        (**self).platform()
    }
}

#[derive(Debug, Clone, Copy)]
struct ScreenState {
    platform: Platform,
    resolution: Resolution,
    window: Resolution,
    safe_area: Rect,
}

/// In-memory screen whose state the host can change at runtime.
///
/// Share it with the mapper through an [`Arc`]; every setter is visible to
/// the next query.
#[derive(Debug)]
pub struct SimulatedScreen {
    state: RwLock<ScreenState>,
}

impl SimulatedScreen {
    /// Creates a full-bleed screen: safe area equals the resolution, and the
    /// window matches the display.
    #[must_use]
    pub fn new(platform: Platform, resolution: Resolution) -> Self {
        Self {
            state: RwLock::new(ScreenState {
                platform,
                resolution,
                window: resolution,
                safe_area: resolution.full_rect(),
            }),
        }
    }

    /// Creates a screen from a device profile.
    #[must_use]
    pub fn from_profile(profile: &DeviceProfile) -> Self {
        Self {
            state: RwLock::new(ScreenState {
                platform: profile.platform,
                resolution: profile.resolution,
                window: profile.window.unwrap_or(profile.resolution),
                safe_area: profile.safe_area,
            }),
        }
    }

    /// Sets the reported safe area.
    pub fn set_safe_area(&self, safe_area: Rect) {
        self.state.write().safe_area = safe_area;
    }

    /// Sets the platform's current resolution.
    pub fn set_resolution(&self, resolution: Resolution) {
        self.state.write().resolution = resolution;
    }

    /// Sets the window client size.
    pub fn set_window_size(&self, window: Resolution) {
        self.state.write().window = window;
    }

    /// Sets the reported platform.
    pub fn set_platform(&self, platform: Platform) {
        self.state.write().platform = platform;
    }

    /// Rotates the display a quarter turn: swaps both resolutions and
    /// transposes the safe area.
    pub fn rotate(&self) {
        let mut state = self.state.write();
        let swap = |r: Resolution| Resolution::new(r.height, r.width);
        state.resolution = swap(state.resolution);
        state.window = swap(state.window);
        let s = state.safe_area;
        state.safe_area = Rect::new(s.y, s.x, s.height, s.width);
    }
}

impl ScreenProvider for SimulatedScreen {
    fn safe_area(&self) -> Rect {
        self.state.read().safe_area
    }

    fn current_resolution(&self) -> Resolution {
        self.state.read().resolution
    }

    fn window_size(&self) -> Resolution {
        self.state.read().window
    }

    fn platform(&self) -> Platform {
        self.state.read().platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_resolution_source() {
        let screen = SimulatedScreen::new(Platform::Ios, Resolution::new(2560, 1440));
        screen.set_window_size(Resolution::new(390, 844));

        assert_eq!(
            Environment::Device.effective_resolution(&screen),
            Resolution::new(2560, 1440)
        );
        assert_eq!(
            Environment::Simulator.effective_resolution(&screen),
            Resolution::new(390, 844)
        );
    }

    #[test]
    fn test_shared_updates_visible() {
        let screen = Arc::new(SimulatedScreen::new(Platform::Android, Resolution::new(1080, 2200)));
        let view = Arc::clone(&screen);

        screen.set_safe_area(Rect::new(0.0, 40.0, 1080.0, 2100.0));

        assert_eq!(view.safe_area(), Rect::new(0.0, 40.0, 1080.0, 2100.0));
        assert_eq!(view.platform(), Platform::Android);
    }

    #[test]
    fn test_rotate() {
        let screen = SimulatedScreen::new(Platform::Ios, Resolution::new(1170, 2532));
        screen.set_safe_area(Rect::new(0.0, 47.0, 1170.0, 2451.0));

        screen.rotate();

        assert_eq!(screen.current_resolution(), Resolution::new(2532, 1170));
        assert_eq!(screen.window_size(), Resolution::new(2532, 1170));
        assert_eq!(screen.safe_area(), Rect::new(47.0, 0.0, 2451.0, 1170.0));
    }

    #[test]
    fn test_platform_is_mobile() {
        assert!(Platform::Ios.is_mobile());
        assert!(Platform::Android.is_mobile());
        assert!(!Platform::Desktop.is_mobile());
        assert!(!Platform::Web.is_mobile());
    }
}
