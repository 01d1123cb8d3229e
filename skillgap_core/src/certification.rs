//! Professional certifications

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::error::{CoreError, Result};
use crate::types::CertificationId;

/// A credential held by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: CertificationId,
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    /// `None` means the certification never expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl Certification {
    /// Valid on `day`: no expiry, or expiry on or after it.
    pub fn is_active(&self, day: NaiveDate) -> bool {
        self.expiry_date.map_or(true, |expiry| expiry >= day)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
    pub verified: Option<bool>,
}

impl Record for Certification {
    type Id = CertificationId;
    type Patch = CertificationPatch;

    fn id(&self) -> &CertificationId {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("certification name is empty".to_string()));
        }
        if let Some(expiry) = self.expiry_date {
            if expiry < self.issue_date {
                return Err(CoreError::InvalidInput(format!(
                    "{} expires before it was issued",
                    self.name
                )));
            }
        }
        Ok(())
    }

    fn apply(&mut self, patch: &CertificationPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(issuer) = &patch.issuer {
            self.issuer = issuer.clone();
        }
        if let Some(date) = patch.issue_date {
            self.issue_date = date;
        }
        if let Some(date) = patch.expiry_date {
            self.expiry_date = Some(date);
        }
        if let Some(credential) = &patch.credential_id {
            self.credential_id = Some(credential.clone());
        }
        if let Some(url) = &patch.url {
            self.url = Some(url.clone());
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
    }
}

pub type CertificationCollection = Collection<Certification>;

impl Collection<Certification> {
    /// Record `certification` under a fresh identifier, replacing whatever
    /// id it carried.
    pub fn add(&mut self, mut certification: Certification) -> Result<CertificationId> {
        certification.id = CertificationId::new();
        self.insert(certification)
    }

    pub fn active_count(&self, day: NaiveDate) -> usize {
        self.iter().filter(|c| c.is_active(day)).count()
    }

    /// Active certifications whose expiry falls within `days` of `day`.
    pub fn expiring_within(&self, days: u64, day: NaiveDate) -> Vec<&Certification> {
        let horizon = day.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
        self.iter()
            .filter(|c| matches!(c.expiry_date, Some(expiry) if expiry >= day && expiry <= horizon))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_is_active() {
        let certs = fixtures::certifications();
        let react = certs.get(&CertificationId::from("2")).unwrap();
        let scrum = certs.get(&CertificationId::from("3")).unwrap();

        assert!(react.is_active(date("2025-11-20")));
        assert!(!react.is_active(date("2025-11-21")));
        assert!(scrum.is_active(date("2099-01-01")));
    }

    #[test]
    fn test_expiring_within() {
        let certs = fixtures::certifications();
        let soon: Vec<_> = certs
            .expiring_within(90, date("2025-10-01"))
            .into_iter()
            .map(|c| c.id.as_str().to_string())
            .collect();
        assert_eq!(soon, vec!["2"]);

        assert_eq!(certs.active_count(date("2025-10-01")), 4);
        assert_eq!(certs.active_count(date("2026-06-01")), 2);
    }

    #[test]
    fn test_expiry_before_issue_rejected() {
        let mut certs = CertificationCollection::new();
        let cert = Certification {
            id: CertificationId::from("x"),
            name: "Bad".to_string(),
            issuer: "Nobody".to_string(),
            issue_date: date("2024-01-01"),
            expiry_date: Some(date("2023-01-01")),
            credential_id: None,
            url: None,
            verified: false,
        };
        assert!(matches!(certs.insert(cert), Err(CoreError::InvalidInput(_))));
    }
}
