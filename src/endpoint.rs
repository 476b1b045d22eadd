//! Endpoint rendering for validated queries.

/// Per-query overrides accepted by every client method.
///
/// `congress` falls back to the client's configured default; `offset` falls
/// back to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub congress: Option<i64>,
    pub offset: Option<i64>,
}

impl RequestOptions {
    /// Options overriding only the congress.
    #[must_use]
    pub const fn congress(congress: i64) -> Self {
        Self {
            congress: Some(congress),
            offset: None,
        }
    }

    /// Options overriding only the offset.
    #[must_use]
    pub const fn offset(offset: i64) -> Self {
        Self {
            congress: None,
            offset: Some(offset),
        }
    }

    pub(crate) fn resolve(self, default_congress: i64) -> (i64, i64) {
        (
            self.congress.unwrap_or(default_congress),
            self.offset.unwrap_or(0),
        )
    }
}

/// A rendered request target: ordered path segments plus a resolved offset.
///
/// Constructed only after every validation for the query has passed. Segment
/// order is fixed per query family; the offset travels beside the path and is
/// never embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    offset: i64,
}

impl Endpoint {
    pub(crate) const fn new(segments: Vec<String>, offset: i64) -> Self {
        Self { segments, offset }
    }

    /// Path segments joined with `/`, ready for the transport.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_joins_segments_in_order() {
        let endpoint = Endpoint::new(
            vec!["115".into(), "house".into(), "bills".into(), "passed".into()],
            20,
        );
        assert_eq!(endpoint.path(), "115/house/bills/passed");
        assert_eq!(endpoint.offset(), 20);
    }

    #[test]
    fn options_default_to_client_congress_and_zero_offset() {
        assert_eq!(RequestOptions::default().resolve(115), (115, 0));
        assert_eq!(RequestOptions::congress(114).resolve(115), (114, 0));
        assert_eq!(RequestOptions::offset(40).resolve(115), (115, 40));
        assert_eq!(
            RequestOptions {
                congress: Some(110),
                offset: Some(20)
            }
            .resolve(115),
            (110, 20)
        );
    }
}
