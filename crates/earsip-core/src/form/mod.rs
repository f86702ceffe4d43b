//! Form schemas, validation and editable form state.
//!
//! Every create/edit card in the client is one [`FormSchema`] rendered by the
//! same generic form view. Validation runs before any request is sent and
//! yields field errors plus one summary notification.

mod schema;
mod state;
mod validation;

pub use schema::{FieldKind, FieldSpec, FormKind, FormSchema, Rule};
pub use state::FormState;
pub use validation::{
    CONFIRM_MISMATCH, LETTER_NUMBER_FORMAT, ValidationErrors, is_valid_date,
    is_valid_letter_number, split_paths, validate,
};
