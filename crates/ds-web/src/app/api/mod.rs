// Backend API clients
// The backend exposes a single `/api?data={"action":...}` endpoint; each module wraps one action.

pub mod version;

pub use version::{HttpVersionSource, VersionSource};
