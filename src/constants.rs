// src/constants.rs
//! Domain constants describing the host page and the export layouts.
//!
//! The selector and marker values mirror the markup of the Steam Workshop
//! "subscribed items" listing. If Steam changes its markup, this is the only
//! place that should need an update.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Host page markup
// ---------------------------------------------------------------------------

/// Container selectors for one subscribed item, tried in priority order.
///
/// The first selector matching at least one node wins; later ones are not
/// consulted.
pub const ENTRY_CONTAINER_SELECTORS: [&str; 3] = [
    ".workshopItemSubscription",
    ".workshopItem",
    ".workshop_item",
];

/// Title sub-element inside an entry container.
pub const ENTRY_TITLE_SELECTOR: &str = ".workshopItemTitle";

/// Links whose href contains this are preferred over the first anchor.
pub const ITEM_LINK_MARKER: &str = "filedetails";

/// Title used when an entry has no title sub-element.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Base used to resolve relative hrefs, as the live page would.
pub const DEFAULT_BASE_URL: &str = "https://steamcommunity.com";

// ---------------------------------------------------------------------------
// Export layouts
// ---------------------------------------------------------------------------

pub const SERVICE_NAME: &str = "Steam";

/// Suffix of the per-item file name written into both layouts.
pub const MOD_FILE_EXTENSION: &str = ".sbm";

pub const CSV_HEADER: &str = "FriendlyName,Name,PublishedFileId,PublishedServiceName";

/// Stem of the default export file name (`steam_mods.xml` / `steam_mods.csv`).
pub const EXPORT_FILE_STEM: &str = "steam_mods";

/// Estimated characters per exported entry, used to pre-allocate payloads.
pub const CHARS_PER_ENTRY_ESTIMATE: usize = 192;

// ---------------------------------------------------------------------------
// User feedback
// ---------------------------------------------------------------------------

/// How long a notice stays visible before it clears itself.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(3);

/// Log file name, created in the system temp directory.
pub const LOG_FILE_NAME: &str = "workshop_export.log";
