// src/models/filter.rs
use serde::Deserialize;
use std::num::ParseIntError;

// Valores de `user_id` que não são um filtro por dono
const SENTINELS: &[&str] = &["", "0", "all", "NaN"];

/// Query string das listagens (`?user_id=&view=`).
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub user_id: Option<String>,
    pub view: Option<String>,
}

/// O que fazer quando o `user_id` é sentinela.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelPolicy {
    /// Devolve todos os registos (certificados).
    ListAll,
    /// Só devolve tudo com `view=all`; caso contrário lista vazia (projetos, estágios).
    RequireViewAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerFilter {
    Everyone,
    Nobody,
    Owner(i64),
}

impl ListQuery {
    pub fn is_view_all(&self) -> bool {
        self.view.as_deref() == Some("all")
    }

    /// Resolve o filtro. Um `user_id` não numérico (e não sentinela) devolve o erro de parse.
    pub fn owner_filter(&self, policy: SentinelPolicy) -> Result<OwnerFilter, ParseIntError> {
        let raw = self.user_id.as_deref().unwrap_or("");
        if SENTINELS.contains(&raw) {
            return Ok(match policy {
                SentinelPolicy::ListAll => OwnerFilter::Everyone,
                SentinelPolicy::RequireViewAll if self.is_view_all() => OwnerFilter::Everyone,
                SentinelPolicy::RequireViewAll => OwnerFilter::Nobody,
            });
        }
        raw.trim().parse::<i64>().map(OwnerFilter::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(user_id: Option<&str>, view: Option<&str>) -> ListQuery {
        ListQuery {
            user_id: user_id.map(String::from),
            view: view.map(String::from),
        }
    }

    #[test]
    fn sentinels_list_everything_for_list_all_policy() {
        for uid in [None, Some(""), Some("0"), Some("all"), Some("NaN")] {
            let q = query(uid, None);
            assert_eq!(q.owner_filter(SentinelPolicy::ListAll), Ok(OwnerFilter::Everyone), "{uid:?}");
        }
    }

    #[test]
    fn sentinels_need_view_all_for_strict_policy() {
        for uid in [None, Some("0"), Some("all"), Some("NaN")] {
            assert_eq!(
                query(uid, None).owner_filter(SentinelPolicy::RequireViewAll),
                Ok(OwnerFilter::Nobody)
            );
            assert_eq!(
                query(uid, Some("all")).owner_filter(SentinelPolicy::RequireViewAll),
                Ok(OwnerFilter::Everyone)
            );
        }
        assert_eq!(
            query(None, Some("mine")).owner_filter(SentinelPolicy::RequireViewAll),
            Ok(OwnerFilter::Nobody)
        );
    }

    #[test]
    fn numeric_ids_filter_by_owner_regardless_of_view() {
        assert_eq!(query(Some("5"), Some("all")).owner_filter(SentinelPolicy::RequireViewAll), Ok(OwnerFilter::Owner(5)));
        assert_eq!(query(Some(" 12 "), None).owner_filter(SentinelPolicy::ListAll), Ok(OwnerFilter::Owner(12)));
    }

    #[test]
    fn garbage_ids_are_parse_errors() {
        assert!(query(Some("abc"), None).owner_filter(SentinelPolicy::ListAll).is_err());
        assert!(query(Some("nan"), None).owner_filter(SentinelPolicy::ListAll).is_err());
    }
}
