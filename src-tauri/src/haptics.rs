use log::warn;
use tauri::AppHandle;

/// Strength of a feedback pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseIntensity {
    Light,
    Medium,
    Heavy,
}

/// Fire-and-forget feedback channel for idle nudges.
///
/// Implementations swallow delivery failures; the monitor loop never has to
/// handle an error from here.
pub trait HapticFeedback: Send + Sync {
    fn pulse(&self, intensity: PulseIntensity);
}

/// Feedback through the host system: a haptic impact on mobile, a system
/// notification on desktop.
pub struct SystemHaptics {
    app: AppHandle,
}

impl SystemHaptics {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl HapticFeedback for SystemHaptics {
    #[cfg(mobile)]
    fn pulse(&self, intensity: PulseIntensity) {
        use tauri_plugin_haptics::{HapticsExt, ImpactFeedbackStyle};

        let style = match intensity {
            PulseIntensity::Light => ImpactFeedbackStyle::Light,
            PulseIntensity::Medium => ImpactFeedbackStyle::Medium,
            PulseIntensity::Heavy => ImpactFeedbackStyle::Heavy,
        };
        if let Err(e) = self.app.haptics().impact_feedback(style) {
            warn!("Failed to send haptic pulse: {}", e);
        }
    }

    #[cfg(desktop)]
    fn pulse(&self, _intensity: PulseIntensity) {
        use tauri_plugin_notification::NotificationExt;

        if let Err(e) = self
            .app
            .notification()
            .builder()
            .title("MoodTap")
            .body("Still there? Log how you feel.")
            .show()
        {
            warn!("Failed to show idle nudge notification: {}", e);
        }
    }
}
