mod button;
mod card;
mod icon_circle;
mod screen;
mod tab_bar;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use icon_circle::IconCircle;
pub use screen::{Screen, ScreenHeader};
pub use tab_bar::TabBar;
