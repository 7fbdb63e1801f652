//! Approval service endpoints, relative to the configured base URL.

use codex_domain::CharacterId;

use crate::catalog::CatalogCategory;

pub const CREATE_CHARACTER_PATH: &str = "/api/traits/character/create/";

pub fn catalog_path(category: CatalogCategory) -> String {
    format!("/api/traits/?category={}", category)
}

pub fn resubmit_path(id: CharacterId) -> String {
    format!("/api/traits/character/{}/resubmit/", id)
}

pub fn for_edit_path(id: CharacterId) -> String {
    format!("/api/traits/character/{}/for-edit/", id)
}

/// Where a build is submitted: create for new characters, resubmit when editing.
pub fn submit_path(editing: Option<CharacterId>) -> String {
    editing.map_or_else(|| CREATE_CHARACTER_PATH.to_string(), resubmit_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_service_routes() {
        assert_eq!(
            catalog_path(CatalogCategory::Advantages),
            "/api/traits/?category=advantages"
        );
        assert_eq!(submit_path(None), "/api/traits/character/create/");
        assert_eq!(
            submit_path(Some(CharacterId::new(9))),
            "/api/traits/character/9/resubmit/"
        );
        assert_eq!(
            for_edit_path(CharacterId::new(9)),
            "/api/traits/character/9/for-edit/"
        );
    }
}
