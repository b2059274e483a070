//! Library integration tests.

use asset_selection::SelectionError;

#[test]
fn error_types_are_public() {
    let err = SelectionError::ConfigValidation {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> asset_selection::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn custom_asset_types_can_be_selected() {
    use asset_selection::asset::Asset;
    use asset_selection::selection::AssetStore;

    #[derive(Debug, Clone, PartialEq)]
    struct LibraryItem {
        local_id: String,
        favorite: bool,
    }

    impl Asset for LibraryItem {
        fn local_identifier(&self) -> &str {
            &self.local_id
        }
    }

    let item = |id: &str| LibraryItem {
        local_id: id.to_string(),
        favorite: false,
    };

    let mut store = AssetStore::new();
    store.append(item("one"));
    store.append(item("two"));

    assert_eq!(store.index_of(&item("two")), Some(1));
    assert!(!store.assets()[0].favorite);
}
