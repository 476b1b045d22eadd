//! Query facade over the ProPublica Congress API.
//!
//! Every query method follows the same template: resolve the effective
//! congress and offset from [`RequestOptions`], run the method's validations
//! in a fixed order, and on the first failure reject without touching the
//! network. Once everything passes, the endpoint is rendered and handed to
//! the transport; its response body comes back verbatim.
//!
//! # Example
//!
//! ```ignore
//! use propublica_congress::{Client, RequestOptions};
//!
//! let client = Client::new("my-api-key", 115)?;
//! let bills = client
//!     .get_recent_bills("house", "passed", RequestOptions::default())
//!     .await?;
//! ```

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::endpoint::{Endpoint, RequestOptions};
use crate::error::Error;
use crate::transport::{HttpTransport, Transport, DEFAULT_BASE_URL};
use crate::types::{BillDetailType, Chamber, MemberComparisonType, RecentBillType};
use crate::validators;

/// Earliest congress with bill data, for every bill endpoint.
const EARLIEST_BILLS_CONGRESS: i64 = 105;

/// Client for the ProPublica Congress API.
///
/// Holds no mutable state; one instance may serve many concurrent calls.
/// Generic over the transport so tests can substitute
/// [`mock::MockTransport`](crate::transport::mock::MockTransport).
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
    congress: i64,
    current_congress: i64,
}

impl Client<HttpTransport> {
    /// Create a client talking to the live API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidApiKey`] for an empty key and
    /// [`Error::InvalidCongress`] when `congress` is later than the latest
    /// known session.
    pub fn new(api_key: &str, congress: i64) -> Result<Self, Error> {
        Self::with_transport(HttpTransport::new(DEFAULT_BASE_URL, api_key), api_key, congress)
    }

    /// Create a client from loaded [`Config`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Client::new`], evaluated against
    /// `config.current_congress`.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::with_transport_as_of(
            HttpTransport::new(&config.base_url, &config.api_key),
            &config.api_key,
            config.congress,
            config.current_congress,
        )
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over a custom transport.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Client::new`].
    pub fn with_transport(transport: T, api_key: &str, congress: i64) -> Result<Self, Error> {
        Self::with_transport_as_of(transport, api_key, congress, validators::CURRENT_SESSION)
    }

    /// As [`Client::with_transport`], with an explicit latest-known congress.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Client::new`].
    pub fn with_transport_as_of(
        transport: T,
        api_key: &str,
        congress: i64,
        current_congress: i64,
    ) -> Result<Self, Error> {
        if !validators::is_valid_api_key(api_key) {
            return Err(Error::InvalidApiKey);
        }
        if !validators::is_valid_congress_as_of(congress, None, current_congress) {
            return Err(Error::InvalidCongress(congress));
        }
        Ok(Self {
            transport,
            congress,
            current_congress,
        })
    }

    /// The configured default congress.
    #[must_use]
    pub const fn congress(&self) -> i64 {
        self.congress
    }

    /// The transport handle queries are issued through.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Recent bills for a chamber, filtered by recency type
    /// (`introduced`, `updated`, `passed`, or `major`).
    ///
    /// # Errors
    ///
    /// Rejects with the first failed validation: chamber, congress
    /// (105 at the earliest), bill type, then offset.
    pub async fn get_recent_bills(
        &self,
        chamber: &str,
        bill_type: &str,
        options: RequestOptions,
    ) -> Result<Value, Error> {
        let (congress, offset) = options.resolve(self.congress);
        self.check_chamber(chamber)?;
        self.check_congress(congress, Some(EARLIEST_BILLS_CONGRESS))?;
        if !validators::is_valid_type(bill_type, &RecentBillType::VALUES) {
            return Err(rejected(Error::InvalidRecentBillType(bill_type.to_string())));
        }
        check_offset(offset)?;

        self.fetch(Endpoint::new(
            vec![
                congress.to_string(),
                chamber.to_string(),
                "bills".to_string(),
                bill_type.to_string(),
            ],
            offset,
        ))
        .await
    }

    /// A single bill by its house-resolution identifier.
    ///
    /// # Errors
    ///
    /// Rejects with the first failed validation: congress (105 at the
    /// earliest), bill ID, then offset.
    pub async fn get_bill(&self, bill_id: &str, options: RequestOptions) -> Result<Value, Error> {
        let (congress, offset) = options.resolve(self.congress);
        self.check_congress(congress, Some(EARLIEST_BILLS_CONGRESS))?;
        check_bill_id(bill_id)?;
        check_offset(offset)?;

        self.fetch(Endpoint::new(
            vec![congress.to_string(), "bills".to_string(), bill_id.to_string()],
            offset,
        ))
        .await
    }

    /// A bill sub-resource: `subjects`, `amendments`, `related`, or
    /// `cosponsors`.
    ///
    /// # Errors
    ///
    /// Rejects with the first failed validation: congress (105 at the
    /// earliest), bill ID, detail type, then offset.
    pub async fn get_additional_bill_details(
        &self,
        bill_id: &str,
        detail_type: &str,
        options: RequestOptions,
    ) -> Result<Value, Error> {
        let (congress, offset) = options.resolve(self.congress);
        self.check_congress(congress, Some(EARLIEST_BILLS_CONGRESS))?;
        check_bill_id(bill_id)?;
        if !validators::is_valid_type(detail_type, &BillDetailType::VALUES) {
            return Err(rejected(Error::InvalidBillDetailType(
                detail_type.to_string(),
            )));
        }
        check_offset(offset)?;

        self.fetch(Endpoint::new(
            vec![
                congress.to_string(),
                "bills".to_string(),
                bill_id.to_string(),
                detail_type.to_string(),
            ],
            offset,
        ))
        .await
    }

    /// Member roster for a chamber.
    ///
    /// House lists reach back to the 102nd congress, Senate lists to the
    /// 80th.
    ///
    /// # Errors
    ///
    /// Rejects with the first failed validation: chamber, congress, then
    /// offset.
    pub async fn get_member_list(
        &self,
        chamber: &str,
        options: RequestOptions,
    ) -> Result<Value, Error> {
        let (congress, offset) = options.resolve(self.congress);
        let chamber_kind = self.check_chamber(chamber)?;
        self.check_congress(congress, Some(chamber_kind.earliest_member_list_congress()))?;
        check_offset(offset)?;

        self.fetch(Endpoint::new(
            vec![
                congress.to_string(),
                chamber.to_string(),
                "members".to_string(),
            ],
            offset,
        ))
        .await
    }

    /// Members newly sworn in.
    ///
    /// # Errors
    ///
    /// Rejects only on an invalid offset.
    pub async fn get_new_members(&self, options: RequestOptions) -> Result<Value, Error> {
        let offset = options.offset.unwrap_or(0);
        check_offset(offset)?;

        self.fetch(Endpoint::new(
            vec!["members".to_string(), "new".to_string()],
            offset,
        ))
        .await
    }

    /// Vote positions for a single member.
    ///
    /// # Errors
    ///
    /// Rejects with the first failed validation: member ID, then offset.
    pub async fn get_votes_by_member(
        &self,
        member_id: &str,
        options: RequestOptions,
    ) -> Result<Value, Error> {
        let offset = options.offset.unwrap_or(0);
        check_member_id(member_id)?;
        check_offset(offset)?;

        self.fetch(Endpoint::new(
            vec!["members".to_string(), member_id.to_string()],
            offset,
        ))
        .await
    }

    /// Compare two members on `bills` or `votes`.
    ///
    /// House comparisons reach back to the 102nd congress, Senate
    /// comparisons to the 101st.
    ///
    /// # Errors
    ///
    /// Rejects with the first failed validation: first member ID, second
    /// member ID, chamber, congress, comparison type, then offset.
    pub async fn get_member_comparison(
        &self,
        first_member_id: &str,
        second_member_id: &str,
        chamber: &str,
        comparison_type: &str,
        options: RequestOptions,
    ) -> Result<Value, Error> {
        let (congress, offset) = options.resolve(self.congress);
        check_member_id(first_member_id)?;
        check_member_id(second_member_id)?;
        let chamber_kind = self.check_chamber(chamber)?;
        self.check_congress(congress, Some(chamber_kind.earliest_comparison_congress()))?;
        if !validators::is_valid_type(comparison_type, &MemberComparisonType::VALUES) {
            return Err(rejected(Error::InvalidMemberComparisonType(
                comparison_type.to_string(),
            )));
        }
        check_offset(offset)?;

        self.fetch(Endpoint::new(
            vec![
                "members".to_string(),
                first_member_id.to_string(),
                comparison_type.to_string(),
                second_member_id.to_string(),
                congress.to_string(),
                chamber.to_string(),
            ],
            offset,
        ))
        .await
    }

    fn check_chamber(&self, chamber: &str) -> Result<Chamber, Error> {
        Chamber::parse(chamber)
            .ok_or_else(|| rejected(Error::InvalidChamber(chamber.to_string())))
    }

    fn check_congress(&self, congress: i64, earliest: Option<i64>) -> Result<(), Error> {
        if validators::is_valid_congress_as_of(congress, earliest, self.current_congress) {
            Ok(())
        } else {
            Err(rejected(Error::InvalidCongress(congress)))
        }
    }

    async fn fetch(&self, endpoint: Endpoint) -> Result<Value, Error> {
        let path = endpoint.path();
        debug!(%path, offset = endpoint.offset(), "query validated");
        Ok(self.transport.get(&path, endpoint.offset()).await?)
    }
}

fn check_bill_id(bill_id: &str) -> Result<(), Error> {
    if validators::is_valid_bill_id(bill_id) {
        Ok(())
    } else {
        Err(rejected(Error::InvalidBillId(bill_id.to_string())))
    }
}

fn check_member_id(member_id: &str) -> Result<(), Error> {
    if validators::is_valid_member_id(member_id) {
        Ok(())
    } else {
        Err(rejected(Error::InvalidMemberId(member_id.to_string())))
    }
}

fn check_offset(offset: i64) -> Result<(), Error> {
    if validators::is_valid_offset(offset) {
        Ok(())
    } else {
        Err(rejected(Error::InvalidOffset(offset)))
    }
}

fn rejected(err: Error) -> Error {
    warn!(%err, "query rejected before transport call");
    err
}
