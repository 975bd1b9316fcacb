//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuHouse as Home, LuImage as Photo, LuPackage as StorageBox,
        LuPencil as Edit, LuSearch as Search, LuSearchX as NoResults,
        LuTag as Item, LuWarehouse as Unit, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxSeam as StorageBox, BsBuilding as Unit, BsChevronLeft as ChevronLeft,
        BsHouseFill as Home, BsImage as Photo, BsPencil as Edit, BsSearch as Search,
        BsTag as Item, BsXCircle as NoResults, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(HOME, Home);
themed_icon!(SEARCH, Search);
themed_icon!(NO_RESULTS, NoResults);
themed_icon!(UNIT, Unit);
themed_icon!(STORAGE_BOX, StorageBox);
themed_icon!(ITEM, Item);
themed_icon!(PHOTO, Photo);
themed_icon!(EDIT, Edit);
themed_icon!(CLOSE, Close);
