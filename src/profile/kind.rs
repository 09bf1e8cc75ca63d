use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Equipment,
    Observatory,
    Settings,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 3] = [
        ProfileKind::Equipment,
        ProfileKind::Observatory,
        ProfileKind::Settings,
    ];

    /// Directory under the store root holding this kind's profiles.
    pub fn dir_name(self) -> &'static str {
        match self {
            ProfileKind::Equipment => "equipment",
            ProfileKind::Observatory => "observatories",
            ProfileKind::Settings => "settings",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Equipment => "equipment",
            ProfileKind::Observatory => "observatory",
            ProfileKind::Settings => "settings",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
