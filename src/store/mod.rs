//! State container and reducers.
//!
//! The `Store` owns one `RootState` at a time and replaces it wholesale with
//! `RootReducer::reduce(current, action)` on every dispatch.

pub mod reducer;
pub mod game_store;

pub use reducer::{GameReducer, HistoryReducer, Reducer, RootReducer};
pub use game_store::Store;
