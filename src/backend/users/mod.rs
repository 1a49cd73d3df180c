//! Users Module
//!
//! The user record, the store port with its Postgres and in-memory
//! implementations, and the `/api/users` handlers.
//!
//! ```text
//! users/
//! ├── model.rs     - User and NewUser
//! ├── store.rs     - UserStore trait and StoreError
//! ├── postgres.rs  - sqlx-backed store
//! ├── memory.rs    - RwLock-backed store
//! └── handlers/    - GET and POST /api/users
//! ```

pub mod handlers;
pub mod memory;
pub mod model;
pub mod postgres;
pub mod store;

pub use memory::MemoryUserStore;
pub use model::{NewUser, User};
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};
