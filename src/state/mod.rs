pub mod auth;
pub mod cart;
pub mod notify;

pub use auth::{AuthState, AvatarSource, UserProfile};
pub use cart::{CartLine, CartState};
pub use notify::{Notifications, Toast, ToastLevel};
