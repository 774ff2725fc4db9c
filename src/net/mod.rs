//! Network access. The only endpoint this screen talks to is the template
//! rebuild action.

pub mod rebuild;
