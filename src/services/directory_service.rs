use crate::catalog::Catalog;
use crate::domain::{FacilityKind, FacilityOption};

/// Kind filter applied on top of the free-text directory query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryFilter {
    #[default]
    All,
    Kind(FacilityKind),
}

impl DirectoryFilter {
    pub fn parse(input: &str) -> Option<DirectoryFilter> {
        let normalized = input.trim().to_ascii_lowercase();
        if normalized == "todos" || normalized == "all" {
            return Some(DirectoryFilter::All);
        }
        FacilityKind::parse(&normalized).map(DirectoryFilter::Kind)
    }

    fn admits(self, facility: &FacilityOption) -> bool {
        match self {
            DirectoryFilter::All => true,
            DirectoryFilter::Kind(kind) => facility.kind == kind,
        }
    }
}

pub struct DirectoryService;

impl DirectoryService {
    /// Facilities matching both the query and the kind filter, in catalog
    /// order.
    pub fn search<'a>(
        catalog: &'a Catalog,
        query: &str,
        filter: DirectoryFilter,
    ) -> Vec<&'a FacilityOption> {
        catalog
            .facilities()
            .iter()
            .filter(|facility| filter.admits(facility) && facility.matches_query(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_whole_directory() {
        let catalog = Catalog::default();
        let all = DirectoryService::search(&catalog, "", DirectoryFilter::All);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn query_matches_specialties_case_insensitively() {
        let catalog = Catalog::default();
        let cardio = DirectoryService::search(&catalog, "CARDIO", DirectoryFilter::All);
        let names: Vec<_> = cardio.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Hospital São Lucas", "Clínica Vida Nova"]);
    }

    #[test]
    fn kind_filter_composes_with_query() {
        let catalog = Catalog::default();
        let hospitals = DirectoryService::search(
            &catalog,
            "",
            DirectoryFilter::Kind(FacilityKind::Hospital),
        );
        assert_eq!(hospitals.len(), 2);

        let filtered = DirectoryService::search(
            &catalog,
            "pediatria",
            DirectoryFilter::Kind(FacilityKind::Hospital),
        );
        assert_eq!(filtered.len(), 2);

        let labs = DirectoryService::search(
            &catalog,
            "imagem",
            DirectoryFilter::Kind(FacilityKind::Laboratory),
        );
        assert_eq!(labs.len(), 1);
    }

    #[test]
    fn filter_parses_catalog_tokens() {
        assert_eq!(DirectoryFilter::parse("todos"), Some(DirectoryFilter::All));
        assert_eq!(
            DirectoryFilter::parse("clinica"),
            Some(DirectoryFilter::Kind(FacilityKind::Clinic))
        );
        assert_eq!(DirectoryFilter::parse("spa"), None);
    }
}
