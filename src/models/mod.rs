//
//  okta-client
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/09.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Wire Models
//!
//! Plain data records mirroring the remote service's JSON shapes. They are
//! produced by decoding response bodies, carry no behavior beyond field
//! access and local validation, and are owned exclusively by the call site
//! that received them — nothing in this crate caches or shares them.
//!
//! ## Field conventions
//!
//! - Wire names are camelCase except where the service itself deviates
//!   (the credentials object uses `recovery_question`).
//! - Fields the service may omit are `Option` and default to absent, so a
//!   partial response never fails to decode.
//! - Open-shaped payloads the service defines loosely (application
//!   `settings`, schema `definitions`, `_links`) stay as untyped JSON.

/// User records and their nested value objects.
pub mod user;

/// Application records, assignments, and key credentials.
pub mod app;

/// Group records.
pub mod group;

/// Role records.
pub mod role;

/// Session records.
pub mod session;

/// User schema records.
pub mod schema;

/// System log event records.
pub mod event;

pub use app::{AppGroup, AppKeyCredential, AppUser, Application, NewApplication};
pub use event::{Event, EventAction, EventActor};
pub use group::{Group, GroupProfile};
pub use role::Role;
pub use schema::UserSchema;
pub use session::Session;
pub use user::{
    AppLink, Credentials, Password, Profile, Provider, ProviderType, RecoveryQuestion, User,
};
