// src/motion/presets.rs
//
// Animation presets shared by every section. Everything here is built at
// compile time into `PRESETS` and never mutated.

use std::f32::consts::PI;

/// A set of visual properties rendered as inline CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: Option<f32>,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub scale: f32,
    pub rotate: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub shadow: Option<&'static str>,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: None,
        x: 0.0,
        y: 0.0,
        z: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        shadow: None,
    };

    fn transform(&self) -> String {
        let mut parts = vec![];
        if self.x != 0.0 || self.y != 0.0 || self.z != 0.0 {
            parts.push(format!("translate3d({}px, {}px, {}px)", self.x, self.y, self.z));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", self.rotate_y));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(o) = self.opacity {
            css.push_str(&format!("opacity: {o};"));
        }
        css.push_str(&format!("transform: {};", self.transform()));
        if let Some(shadow) = self.shadow {
            css.push_str(&format!("box-shadow: {shadow};"));
        }
        css
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
    Spring { stiffness: f32, damping: f32 },
}

/// CSS approximation of a unit-mass spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    /// Seconds until the spring settles within 2%.
    pub duration: f32,
    /// Fraction of the travel the first swing goes past the target.
    pub overshoot: f32,
}

pub fn spring_curve(stiffness: f32, damping: f32) -> SpringCurve {
    let omega = stiffness.max(1.0).sqrt();
    let zeta = damping.max(0.0) / (2.0 * omega);

    let settle = if zeta < 1.0 {
        4.0 / (zeta.max(0.05) * omega)
    } else {
        4.0 * zeta / omega
    };
    let overshoot = if zeta < 1.0 {
        (-zeta * PI / (1.0 - zeta * zeta).sqrt()).exp()
    } else {
        0.0
    };

    SpringCurve {
        duration: settle.clamp(0.2, 2.0),
        overshoot,
    }
}

impl Ease {
    fn timing(&self) -> String {
        match self {
            Ease::Linear => "linear".to_string(),
            Ease::EaseOut => "ease-out".to_string(),
            Ease::EaseInOut => "ease-in-out".to_string(),
            Ease::Spring { stiffness, damping } => {
                let curve = spring_curve(*stiffness, *damping);
                // The visible peak is about half the control point's excess.
                let y1 = 1.0 + (curve.overshoot * 2.0).min(1.5);
                format!("cubic-bezier(0.34, {y1:.3}, 0.64, 1)")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl Transition {
    pub const fn tween(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Ease::EaseOut,
        }
    }

    pub const fn spring(stiffness: f32, damping: f32) -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            ease: Ease::Spring { stiffness, damping },
        }
    }

    /// Springs ignore `duration` and use their settle time instead.
    pub fn seconds(&self) -> f32 {
        match self.ease {
            Ease::Spring { stiffness, damping } => spring_curve(stiffness, damping).duration,
            _ => self.duration,
        }
    }

    pub fn to_css(&self, extra_delay: f32) -> String {
        format!(
            "transition: all {}s {} {}s;",
            self.seconds(),
            self.ease.timing(),
            self.delay + extra_delay
        )
    }
}

/// Hidden -> visible reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

/// Poses taken while the pointer hovers, presses or focuses an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gestures {
    pub rest: Pose,
    pub hover: Option<Pose>,
    pub tap: Option<Pose>,
    pub focus: Option<Pose>,
    pub transition: Transition,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub step: f32,
}

impl Stagger {
    pub fn delay(&self, index: usize) -> f32 {
        index as f32 * self.step
    }
}

/// Endless keyframe animation; keyframes live in style.css.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loop {
    pub keyframes: &'static str,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
    pub mirror: bool,
}

impl Loop {
    pub fn delayed(self, delay: f32) -> Self {
        Self { delay, ..self }
    }

    pub fn keyframes(self, keyframes: &'static str) -> Self {
        Self { keyframes, ..self }
    }

    pub fn to_css(&self) -> String {
        format!(
            "animation: {} {}s {} {}s infinite{};",
            self.keyframes,
            self.duration,
            self.ease.timing(),
            self.delay,
            if self.mirror { " alternate" } else { "" }
        )
    }
}

/// Multipliers applied to `window.scrollY` for background layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub hero_layer: f64,
    pub hero_background: f64,
    pub about_decor: f64,
    pub contact_decor: f64,
}

pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y.max(0.0) * factor
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presets {
    pub fade_in: Entrance,
    pub fade_in_up: Entrance,
    pub heading: Entrance,
    pub lead: Entrance,
    pub intro: Entrance,
    pub outro: Entrance,
    pub card_rise: Entrance,
    pub card_lift: Gestures,
    pub stagger: Stagger,
    pub social_card_3d: Gestures,
    pub logo: Entrance,
    pub logo_gestures: Gestures,
    pub nav_logo: Entrance,
    pub nav_logo_gestures: Gestures,
    pub footer_logo_gestures: Gestures,
    pub field_focus: Gestures,
    pub submit_button: Gestures,
    pub confirmation: Entrance,
    pub float: Loop,
    pub float_social: Loop,
    pub spin: Loop,
    pub parallax: Parallax,
}

const FADE: Transition = Transition::tween(0.8);

pub static PRESETS: Presets = Presets {
    fade_in: Entrance {
        hidden: Pose { opacity: Some(0.0), y: 20.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: FADE,
    },
    fade_in_up: Entrance {
        hidden: Pose { opacity: Some(0.0), y: 50.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: Transition { delay: 0.2, ..FADE },
    },
    heading: Entrance {
        hidden: Pose { opacity: Some(0.0), y: 30.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: FADE,
    },
    lead: Entrance {
        hidden: Pose { opacity: Some(0.0), y: 20.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: Transition { delay: 0.2, ..FADE },
    },
    intro: Entrance {
        hidden: Pose { opacity: Some(0.0), y: 30.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: Transition { delay: 0.2, ..FADE },
    },
    outro: Entrance {
        hidden: Pose { opacity: Some(0.0), y: 30.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: Transition { delay: 0.6, ..FADE },
    },
    card_rise: Entrance {
        hidden: Pose { opacity: Some(0.0), y: 50.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: Transition { delay: 0.2, ..FADE },
    },
    card_lift: Gestures {
        rest: Pose { opacity: Some(1.0), ..Pose::REST },
        hover: Some(Pose {
            opacity: Some(1.0),
            y: -5.0,
            shadow: Some("0px 20px 40px rgba(0,0,0,0.2)"),
            ..Pose::REST
        }),
        tap: None,
        focus: None,
        transition: Transition::tween(0.3),
    },
    stagger: Stagger { step: 0.2 },
    social_card_3d: Gestures {
        rest: Pose {
            opacity: Some(1.0),
            shadow: Some("0px 10px 20px rgba(0,0,0,0.1)"),
            ..Pose::REST
        },
        hover: Some(Pose {
            opacity: Some(1.0),
            z: 50.0,
            scale: 1.05,
            rotate_x: -10.0,
            rotate_y: 15.0,
            shadow: Some("0px 30px 50px rgba(0,0,0,0.3)"),
            ..Pose::REST
        }),
        tap: None,
        focus: None,
        transition: Transition {
            duration: 0.4,
            delay: 0.0,
            ease: Ease::EaseOut,
        },
    },
    logo: Entrance {
        hidden: Pose { opacity: Some(0.0), scale: 0.0, rotate: -180.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: Transition {
            delay: 0.3,
            ..Transition::spring(260.0, 20.0)
        },
    },
    logo_gestures: Gestures {
        rest: Pose { opacity: Some(1.0), ..Pose::REST },
        hover: Some(Pose {
            opacity: Some(1.0),
            scale: 1.1,
            rotate: 10.0,
            shadow: Some("0px 20px 30px rgba(0,0,0,0.2)"),
            ..Pose::REST
        }),
        tap: Some(Pose { opacity: Some(1.0), scale: 0.95, rotate: -5.0, ..Pose::REST }),
        focus: None,
        transition: Transition::spring(400.0, 10.0),
    },
    nav_logo: Entrance {
        hidden: Pose { opacity: Some(0.0), scale: 0.8, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: Transition::tween(0.5),
    },
    nav_logo_gestures: Gestures {
        rest: Pose { opacity: Some(1.0), ..Pose::REST },
        hover: Some(Pose { opacity: Some(1.0), scale: 1.1, rotate: 5.0, ..Pose::REST }),
        tap: Some(Pose { opacity: Some(1.0), scale: 0.95, ..Pose::REST }),
        focus: None,
        transition: Transition::tween(0.5),
    },
    footer_logo_gestures: Gestures {
        rest: Pose { opacity: Some(1.0), ..Pose::REST },
        hover: Some(Pose { opacity: Some(1.0), scale: 1.1, rotate: 10.0, ..Pose::REST }),
        tap: None,
        focus: None,
        transition: Transition::spring(400.0, 10.0),
    },
    field_focus: Gestures {
        rest: Pose::REST,
        hover: None,
        tap: None,
        focus: Some(Pose {
            scale: 1.02,
            shadow: Some("0px 5px 15px rgba(0,0,0,0.1)"),
            ..Pose::REST
        }),
        transition: Transition::tween(0.2),
    },
    submit_button: Gestures {
        rest: Pose::REST,
        hover: Some(Pose {
            scale: 1.05,
            shadow: Some("0px 10px 25px rgba(0,128,0,0.3)"),
            ..Pose::REST
        }),
        tap: Some(Pose { scale: 0.95, ..Pose::REST }),
        focus: None,
        transition: Transition::spring(400.0, 10.0),
    },
    confirmation: Entrance {
        hidden: Pose { opacity: Some(0.0), y: 20.0, ..Pose::REST },
        visible: Pose { opacity: Some(1.0), ..Pose::REST },
        transition: Transition::tween(0.6),
    },
    float: Loop {
        keyframes: "motion-float",
        duration: 5.0,
        delay: 0.0,
        ease: Ease::EaseInOut,
        mirror: true,
    },
    float_social: Loop {
        keyframes: "motion-float-social",
        duration: 6.0,
        delay: 0.0,
        ease: Ease::EaseInOut,
        mirror: true,
    },
    spin: Loop {
        keyframes: "motion-spin",
        duration: 20.0,
        delay: 0.0,
        ease: Ease::Linear,
        mirror: false,
    },
    parallax: Parallax {
        hero_layer: 0.3,
        hero_background: 0.5,
        about_decor: 0.15,
        contact_decor: 0.09,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rest_pose_has_no_transform() {
        assert_eq!(Pose::REST.to_css(), "transform: none;");
    }

    #[test]
    fn hidden_fade_renders_opacity_and_offset() {
        let css = PRESETS.fade_in.hidden.to_css();
        assert_eq!(css, "opacity: 0;transform: translate3d(0px, 20px, 0px);");
    }

    #[test]
    fn tilt_hover_renders_every_transform() {
        let css = PRESETS.social_card_3d.hover.unwrap().to_css();
        assert!(css.contains("translate3d(0px, 0px, 50px)"));
        assert!(css.contains("scale(1.05)"));
        assert!(css.contains("rotateX(-10deg)"));
        assert!(css.contains("rotateY(15deg)"));
        assert!(css.contains("box-shadow: 0px 30px 50px rgba(0,0,0,0.3);"));
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let bouncy = spring_curve(400.0, 10.0);
        let firm = spring_curve(260.0, 20.0);
        assert!(bouncy.overshoot > firm.overshoot);
        assert!(firm.overshoot > 0.0);
        assert!(bouncy.duration > firm.duration);
    }

    #[test]
    fn critically_damped_spring_does_not_overshoot() {
        // omega = 10, so damping 20 is critical and 40 is overdamped.
        assert_eq!(spring_curve(100.0, 20.0).overshoot, 0.0);
        assert_eq!(spring_curve(100.0, 40.0).overshoot, 0.0);
        assert!(spring_curve(100.0, 40.0).duration > spring_curve(100.0, 20.0).duration);
    }

    #[test]
    fn spring_duration_is_clamped() {
        assert_eq!(spring_curve(1.0, 0.0).duration, 2.0);
        assert_eq!(spring_curve(1_000_000.0, 2_000.0).duration, 0.2);
    }

    #[test]
    fn spring_transition_uses_settle_time() {
        let t = PRESETS.logo.transition;
        let css = t.to_css(0.0);
        assert!(css.starts_with(&format!("transition: all {}s cubic-bezier(0.34, ", t.seconds())));
        assert!(css.ends_with(" 0.3s;"));
    }

    #[test]
    fn tween_transition_adds_extra_delay() {
        assert_eq!(
            PRESETS.fade_in_up.transition.to_css(0.4),
            format!("transition: all 0.8s ease-out {}s;", 0.2f32 + 0.4)
        );
    }

    #[test]
    fn nav_logo_eases_instead_of_bouncing() {
        let t = PRESETS.nav_logo_gestures.transition;
        assert_eq!(t, Transition::tween(0.5));
        assert_eq!(t.to_css(0.0), "transition: all 0.5s ease-out 0s;");
    }

    #[test]
    fn social_intro_rises_like_a_heading_after_a_pause() {
        let intro = PRESETS.intro;
        assert_eq!(intro.hidden, PRESETS.heading.hidden);
        assert_eq!(intro.hidden.y, 30.0);
        assert_eq!(intro.transition.delay, 0.2);
        assert_eq!(intro.transition.seconds(), PRESETS.lead.transition.seconds());
        assert_ne!(intro.hidden, PRESETS.lead.hidden);
    }

    #[test]
    fn stagger_delays_grow_linearly() {
        let s = PRESETS.stagger;
        let delays: Vec<f32> = (0..3).map(|i| s.delay(i)).collect();
        assert_eq!(delays[0], 0.0);
        assert_eq!(delays[1], 0.2);
        assert!((delays[2] - 2.0 * delays[1]).abs() < f32::EPSILON);
    }

    #[test]
    fn loop_css_mirrors_when_asked() {
        assert_eq!(
            PRESETS.float.delayed(0.5).to_css(),
            "animation: motion-float 5s ease-in-out 0.5s infinite alternate;"
        );
        assert_eq!(
            PRESETS.spin.to_css(),
            "animation: motion-spin 20s linear 0s infinite;"
        );
    }

    #[test]
    fn parallax_ignores_overscroll() {
        assert!((parallax_offset(100.0, PRESETS.parallax.hero_layer) - 30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(-40.0, 0.5), 0.0);
    }
}
