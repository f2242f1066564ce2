// Session store and presentation adapter.
// Stores engine results under opaque tokens and unpacks them for the result view.

pub mod handlers;
pub mod store;
pub mod view;
