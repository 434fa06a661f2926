//! Configuration for a swipe-to-verify control.
//!
//! Colors, text and border radius are carried for the view layer and never
//! read by the state machine. Timings feed the presentation animations.

use swipe_verify_animation::{AnimationSpec, Easing};
use swipe_verify_graphics::Color;

use crate::error::ConfigError;

/// Duration of the slide back to rest after an unsuccessful release.
pub const DEFAULT_RESET_DURATION_MILLIS: u64 = 500;

/// Duration of the handle fade on verify and on reset.
pub const DEFAULT_OK_BUTTON_DURATION_MILLIS: u64 = 300;

/// Upper bound for configured durations (one hour).
pub const MAX_DURATION_MILLIS: u64 = 60 * 60 * 1000;

/// Handle behavior once verification succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OkButton {
    /// Keep the handle visible after verification. When `false` it fades out.
    pub visible: bool,
    /// Fade duration in milliseconds, used both for hiding and restoring.
    pub duration_millis: u64,
}

impl Default for OkButton {
    fn default() -> Self {
        Self {
            visible: true,
            duration_millis: DEFAULT_OK_BUTTON_DURATION_MILLIS,
        }
    }
}

/// What happens when the host cancels a gesture in progress, e.g. because
/// another responder took over the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Treat the cancel as a release that cannot verify: return to idle and
    /// slide the handle home.
    #[default]
    Revert,
    /// Leave status and handle untouched; the next gesture start re-anchors
    /// at the handle's current offset.
    Defer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwipeVerifyConfig {
    /// Side length of the square handle; also the track's resting fill width.
    pub button_size: f32,
    pub background_color: Color,
    pub button_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub text: Option<String>,
    pub border_radius: f32,
    /// Initial disabled state. Disabled controls ignore all gesture input.
    pub disable: bool,
    pub ok_button: OkButton,
    pub reset_duration_millis: u64,
    pub easing: Easing,
    pub cancel_policy: CancelPolicy,
}

impl SwipeVerifyConfig {
    pub fn new(button_size: f32) -> Self {
        Self {
            button_size,
            background_color: Color::WHITE,
            button_color: Color::from_rgb_u8(0xD5, 0x00, 0x00),
            border_color: Color::TRANSPARENT,
            text_color: Color::BLACK,
            text: None,
            border_radius: 0.0,
            disable: false,
            ok_button: OkButton::default(),
            reset_duration_millis: DEFAULT_RESET_DURATION_MILLIS,
            easing: Easing::default(),
            cancel_policy: CancelPolicy::default(),
        }
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_button_color(mut self, color: Color) -> Self {
        self.button_color = color;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>, color: Color) -> Self {
        self.text = Some(text.into());
        self.text_color = color;
        self
    }

    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn with_disabled(mut self, disable: bool) -> Self {
        self.disable = disable;
        self
    }

    pub fn with_ok_button(mut self, visible: bool, duration_millis: u64) -> Self {
        self.ok_button = OkButton {
            visible,
            duration_millis,
        };
        self
    }

    pub fn with_reset_duration(mut self, duration_millis: u64) -> Self {
        self.reset_duration_millis = duration_millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.button_size.is_finite() || self.button_size <= 0.0 {
            return Err(ConfigError::InvalidButtonSize {
                size: self.button_size,
            });
        }
        if !self.border_radius.is_finite() || self.border_radius < 0.0 {
            return Err(ConfigError::InvalidBorderRadius {
                radius: self.border_radius,
            });
        }
        for (name, millis) in [
            ("reset", self.reset_duration_millis),
            ("ok button", self.ok_button.duration_millis),
        ] {
            if millis > MAX_DURATION_MILLIS {
                return Err(ConfigError::InvalidDuration { name, millis });
            }
        }
        Ok(())
    }

    /// Tween used to slide the handle back to rest.
    pub fn reset_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.reset_duration_millis, self.easing)
    }

    /// Tween used to fade the handle out and back in.
    pub fn fade_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.ok_button.duration_millis, self.easing)
    }
}
