mod about;
mod background;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod icons;
mod modal;
mod portfolio;
mod services;
mod skills;

pub use about::About;
pub use background::BackgroundShapes;
pub use contact::Contact;
pub use experience::ExperienceTimeline;
pub use footer::Footer;
pub use header::{Header, NavState};
pub use hero::Hero;
pub use icons::{
    AwardIcon, ChevronRightIcon, CloseIcon, Icon, IconGlyph, MailIcon, MenuIcon, PhoneIcon,
    SearchIcon, SendIcon,
};
pub use modal::Modal;
pub use portfolio::{GalleryState, Portfolio};
pub use services::Services;
pub use skills::Skills;
