//! Closed vocabularies for query parameters.
//!
//! Each query family owns a fixed set of legal values. Keeping them as enums
//! makes the vocabularies discoverable statically instead of living in ad-hoc
//! sets at every call site.

/// A chamber of Congress.
///
/// Several endpoints impose chamber-specific earliest-congress thresholds;
/// those live here so the client methods stay declarative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chamber {
    Senate,
    House,
}

impl Chamber {
    /// Legal wire values, as the upstream API spells them.
    pub const VALUES: [&'static str; 2] = ["senate", "house"];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "senate" => Some(Self::Senate),
            "house" => Some(Self::House),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Senate => "senate",
            Self::House => "house",
        }
    }

    /// Earliest congress with member list data for this chamber.
    #[must_use]
    pub const fn earliest_member_list_congress(self) -> i64 {
        match self {
            Self::Senate => 80,
            Self::House => 102,
        }
    }

    /// Earliest congress with member comparison data for this chamber.
    #[must_use]
    pub const fn earliest_comparison_congress(self) -> i64 {
        match self {
            Self::Senate => 101,
            Self::House => 102,
        }
    }
}

/// Recency filters accepted by the recent-bills endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentBillType {
    Introduced,
    Updated,
    Passed,
    Major,
}

impl RecentBillType {
    pub const VALUES: [&'static str; 4] = ["introduced", "updated", "passed", "major"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Introduced => "introduced",
            Self::Updated => "updated",
            Self::Passed => "passed",
            Self::Major => "major",
        }
    }
}

/// Sub-resources available under a single bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillDetailType {
    Subjects,
    Amendments,
    Related,
    Cosponsors,
}

impl BillDetailType {
    pub const VALUES: [&'static str; 4] = ["subjects", "amendments", "related", "cosponsors"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subjects => "subjects",
            Self::Amendments => "amendments",
            Self::Related => "related",
            Self::Cosponsors => "cosponsors",
        }
    }
}

/// Dimensions two members can be compared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberComparisonType {
    Bills,
    Votes,
}

impl MemberComparisonType {
    pub const VALUES: [&'static str; 2] = ["bills", "votes"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bills => "bills",
            Self::Votes => "votes",
        }
    }
}
