//! Browser glue kept out of state and page code.
//!
//! `storage` hides `localStorage` behind a trait so the auth store runs the
//! same way in the browser, natively, and under test.

pub mod storage;
