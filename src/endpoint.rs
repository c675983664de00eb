//! Catalog of the remote endpoints the client wraps.

use std::fmt;

/// Remote endpoints wrapped by [`crate::ApiClient`], one per operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SpeedTest,
    CensusBlock,
    FrnList,
    FrnInfo,
    Licenses,
    LicenseCommonNames,
    LicenseStatuses,
    LicenseCategories,
    LicenseEntities,
    LicenseRenewals,
    LicenseIssued,
}

impl Endpoint {
    /// Every endpoint, in the order the client exposes them.
    pub const ALL: [Self; 11] = [
        Self::SpeedTest,
        Self::CensusBlock,
        Self::FrnList,
        Self::FrnInfo,
        Self::Licenses,
        Self::LicenseCommonNames,
        Self::LicenseStatuses,
        Self::LicenseCategories,
        Self::LicenseEntities,
        Self::LicenseRenewals,
        Self::LicenseIssued,
    ];

    /// Path relative to the service root.
    pub fn path(self) -> &'static str {
        match self {
            Self::SpeedTest => "/api/speedtest/find",
            Self::CensusBlock => "/api/block/find",
            Self::FrnList => "/api/frn/getList",
            Self::FrnInfo => "/api/frn/getInfo",
            Self::Licenses => "/api/license-view/basicSearch/getLicenses",
            Self::LicenseCommonNames => "/api/license-view/licenses/getCommonNames",
            Self::LicenseStatuses => "/api/license-view/licenses/getStatuses",
            Self::LicenseCategories => "/api/license-view/licenses/getCategories",
            Self::LicenseEntities => "/api/license-view/licenses/getEntities",
            Self::LicenseRenewals => "/api/license-view/licenses/getRenewals",
            Self::LicenseIssued => "/api/license-view/licenses/getIssued",
        }
    }

    /// Method name as documented by the remote service.
    pub fn remote_name(self) -> &'static str {
        match self {
            Self::SpeedTest => "findSpeedTest",
            Self::CensusBlock => "findCensusBlock",
            Self::FrnList => "getFRNList",
            Self::FrnInfo => "getFRNInfo",
            Self::Licenses => "getLicenses",
            Self::LicenseCommonNames => "getCommonNames",
            Self::LicenseStatuses => "getStatuses",
            Self::LicenseCategories => "getCategories",
            Self::LicenseEntities => "getEntities",
            Self::LicenseRenewals => "getRenewals",
            Self::LicenseIssued => "getIssued",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.remote_name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Endpoint;

    #[test]
    fn paths_are_absolute_and_distinct() {
        let paths: HashSet<_> = Endpoint::ALL
            .iter()
            .map(|endpoint| endpoint.path())
            .collect();
        assert_eq!(paths.len(), Endpoint::ALL.len());
        assert!(paths.iter().all(|path| path.starts_with("/api/")));
    }

    #[test]
    fn license_statistics_share_a_prefix() {
        for endpoint in &Endpoint::ALL[5..] {
            assert!(
                endpoint.path().starts_with("/api/license-view/licenses/"),
                "{endpoint}"
            );
        }
    }
}
