//! Typed operations over the FCC data API.

use std::collections::BTreeMap;

use log::warn;
use serde_json::Value;

use crate::envelope::{self, Record};
use crate::transport::{ParamValue, Params, Transport};
use crate::{BlockingTransport, ClientError, Endpoint, Lookup};

/// Root of the FCC public data API.
pub const DEFAULT_BASE_URL: &str = "http://data.fcc.gov";

const ACCEPT_JSON: &str = "Accept: application/json";
const LICENSE_PAGE_SIZE: i64 = 1000;

/// Blocking client for the FCC public data API.
///
/// Every operation returns a [`Lookup`]: [`Lookup::Unavailable`] when the
/// service could not be reached or answered with something that is not JSON,
/// [`Lookup::Empty`] when the response lacks the expected data, and
/// [`Lookup::Found`] otherwise. Operations never return errors or panic.
///
/// The transport is generic so tests can substitute their own; see
/// [`Self::with_transport`].
#[derive(Clone, Debug)]
pub struct ApiClient<T = BlockingTransport> {
    transport: T,
}

impl ApiClient {
    /// Creates a client for [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with an explicit base URL.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Ok(Self::with_transport(BlockingTransport::new(base_url)?))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client sending through an existing transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Broadband speed test summary for the county containing a point.
    ///
    /// Fields include `wirelineMaxDownload`, `wirelessAvgUpload`,
    /// `wirelineTests` and `wirelessTests`.
    pub fn find_speed_test(
        &self,
        latitude: impl Into<ParamValue>,
        longitude: impl Into<ParamValue>,
    ) -> Lookup<Record> {
        self.call(
            Endpoint::SpeedTest,
            coordinates(latitude, longitude),
            envelope::speed_test_county,
        )
    }

    /// Census block, county and state FIPS codes for a point.
    ///
    /// The record holds exactly the `Block`, `County` and `State` entries
    /// present in the response.
    pub fn find_census_block(
        &self,
        latitude: impl Into<ParamValue>,
        longitude: impl Into<ParamValue>,
    ) -> Lookup<Record> {
        self.call(
            Endpoint::CensusBlock,
            coordinates(latitude, longitude),
            envelope::census_block,
        )
    }

    /// Companies filed under a state, keyed by FRN.
    pub fn get_frn_list(
        &self,
        state_code: &str,
        multi_states: Option<&str>,
    ) -> Lookup<BTreeMap<String, Record>> {
        let mut params = Params::from([param("stateCode", state_code)]);
        insert_optional(&mut params, "multiStates", multi_states);
        self.call(Endpoint::FrnList, params, envelope::frn_list)
    }

    /// Registration details for one FRN.
    pub fn get_frn_info(&self, frn: &str) -> Lookup<Record> {
        self.call(
            Endpoint::FrnInfo,
            Params::from([param("frn", frn)]),
            envelope::frn_info,
        )
    }

    /// Up to 1000 licenses matching a free-text search.
    pub fn get_licenses(&self, query: &str) -> Lookup<Vec<Record>> {
        let params = Params::from([
            param("searchValue", query),
            param("pageSize", LICENSE_PAGE_SIZE),
        ]);
        self.call(Endpoint::Licenses, params, envelope::licenses)
    }

    /// License counts per licensee common name.
    pub fn get_license_common_names(
        &self,
        common_name: Option<&str>,
        limit: Option<u32>,
    ) -> Lookup<Vec<Record>> {
        self.stats(Endpoint::LicenseCommonNames, common_name, limit)
    }

    /// License counts per status (`Active`, `Expired`, ...).
    pub fn get_license_statuses(
        &self,
        common_name: Option<&str>,
        limit: Option<u32>,
    ) -> Lookup<Vec<Record>> {
        self.stats(Endpoint::LicenseStatuses, common_name, limit)
    }

    /// License counts per radio service category.
    pub fn get_license_categories(
        &self,
        common_name: Option<&str>,
        limit: Option<u32>,
    ) -> Lookup<Vec<Record>> {
        self.stats(Endpoint::LicenseCategories, common_name, limit)
    }

    /// License counts per entity type.
    pub fn get_license_entities(&self) -> Lookup<Vec<Record>> {
        self.stats(Endpoint::LicenseEntities, None, None)
    }

    /// Upcoming renewals per month (`statDesc` is `YYYYMM`).
    pub fn get_license_renewals(&self, common_name: Option<&str>) -> Lookup<Vec<Record>> {
        self.stats(Endpoint::LicenseRenewals, common_name, None)
    }

    /// Licenses issued per year.
    pub fn get_license_issued(&self, common_name: Option<&str>) -> Lookup<Vec<Record>> {
        self.stats(Endpoint::LicenseIssued, common_name, None)
    }

    /// Fetches and decodes the raw envelope of an endpoint.
    ///
    /// `format=json` is always added to `params`. Returns `None` when the
    /// transport produced no body or the body is not JSON.
    pub fn fetch_envelope(&self, endpoint: Endpoint, mut params: Params) -> Option<Value> {
        params.insert("format".to_owned(), "json".into());
        let body = self
            .transport
            .get(endpoint.path(), params, &[ACCEPT_JSON])?;

        match decode(&body) {
            Ok(Value::Null) => None,
            Ok(envelope) => Some(envelope),
            Err(err) => {
                warn!("{endpoint}: discarding response body: {err}");
                None
            }
        }
    }

    fn call<R>(
        &self,
        endpoint: Endpoint,
        params: Params,
        extract: impl FnOnce(Value) -> Lookup<R>,
    ) -> Lookup<R> {
        self.fetch_envelope(endpoint, params)
            .map_or(Lookup::Unavailable, extract)
    }

    fn stats(
        &self,
        endpoint: Endpoint,
        common_name: Option<&str>,
        limit: Option<u32>,
    ) -> Lookup<Vec<Record>> {
        let mut params = Params::new();
        insert_optional(&mut params, "commonName", common_name);
        insert_optional(&mut params, "limit", limit);
        self.call(endpoint, params, envelope::stats)
    }
}

fn decode(body: &str) -> Result<Value, ClientError> {
    Ok(serde_json::from_str(body)?)
}

fn param(key: &str, value: impl Into<ParamValue>) -> (String, ParamValue) {
    (key.to_owned(), value.into())
}

fn coordinates(latitude: impl Into<ParamValue>, longitude: impl Into<ParamValue>) -> Params {
    Params::from([param("latitude", latitude), param("longitude", longitude)])
}

fn insert_optional<V: Into<ParamValue>>(params: &mut Params, key: &str, value: Option<V>) {
    if let Some(value) = value {
        params.insert(key.to_owned(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiClient, DEFAULT_BASE_URL, coordinates, decode, insert_optional};
    use crate::ClientError;
    use crate::transport::{ParamValue, Params};

    #[test]
    fn default_client_targets_fcc_host() {
        let client = ApiClient::new().expect("default url is valid");
        assert_eq!(client.transport().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            ApiClient::with_base_url("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn coordinates_accept_text_and_numbers() {
        let params = coordinates(37.4, "-122.1");
        assert_eq!(params["latitude"], ParamValue::Float(37.4));
        assert_eq!(params["longitude"], ParamValue::from("-122.1"));
    }

    #[test]
    fn optional_params_are_omitted_when_absent() {
        let mut params = Params::new();
        insert_optional::<&str>(&mut params, "commonName", None);
        insert_optional(&mut params, "limit", Some(5_u32));
        assert!(!params.contains_key("commonName"));
        assert_eq!(params["limit"], ParamValue::Integer(5));
    }

    #[test]
    fn decode_reports_malformed_json() {
        assert!(matches!(decode("<html>"), Err(ClientError::Json(_))));
        assert!(decode("{\"Info\":{}}").is_ok());
    }
}
