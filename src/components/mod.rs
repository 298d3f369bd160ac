//! Page behaviour modules. Each one finds its own elements and is skipped
//! when they are missing.

pub mod clock;
pub mod contact_form;
pub mod mobile_nav;
pub mod motion;
pub mod particle_field;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme_toggle;
pub mod toast;
