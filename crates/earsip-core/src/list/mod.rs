//! Paginated list state shared by every list card.
//!
//! Each card owns a [`ListState`]. A fetch starts with [`ListState::request`],
//! which hands out a [`Ticket`]; the response is fed back through
//! [`ListState::apply`]. Only the newest ticket is accepted, so a slow early
//! response can never overwrite a later one, and nothing is accepted after
//! [`ListState::detach`].

mod source;
mod state;

pub use source::{
    DispositionQueue, InboxList, ListSource, LogbookList, OutboxList, UserList, VerificationQueue,
};
pub use state::{ListState, ListUpdate, Ticket};
