use strum::{AsRefStr, Display, EnumIter, EnumString};
use time::OffsetDateTime;

use crate::id::Id;

/// A tour operator running one or more tours.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub id             : Id,
    pub name           : String,
    pub contact_person : Option<String>,
    pub phone          : String,
    pub email          : Option<String>,
    pub city           : String,
    pub description    : Option<String>,
    pub verified       : bool,
    pub status         : OperatorStatus,
    pub created_at     : OffsetDateTime,
}

impl Operator {
    pub fn is_active(&self) -> bool {
        self.status == OperatorStatus::Active
    }

    pub fn fields(&self) -> OperatorFields {
        let Self {
            id: _,
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
            created_at: _,
        } = self.clone();
        OperatorFields {
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
        }
    }
}

/// The writable subset of an [`Operator`].
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperatorFields {
    pub name           : String,
    pub contact_person : Option<String>,
    pub phone          : String,
    pub email          : Option<String>,
    pub city           : String,
    pub description    : Option<String>,
    pub verified       : bool,
    pub status         : OperatorStatus,
}

/// Minimal projection used for operator pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRef {
    pub id: Id,
    pub name: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum OperatorStatus {
    #[default]
    Active,
    Inactive,
}

impl OperatorStatus {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}
