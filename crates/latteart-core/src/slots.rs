//! Save-slot lookup for the game's on-disk state.
//!
//! Espresso Tycoon keeps one directory per save slot under its GameState
//! folder and picks up custom latte art from a `CustomLatteArts` folder in
//! each. Resolution is pure path arithmetic; nothing here touches the disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Folder inside a slot directory that the game scans for textures.
pub const ART_FOLDER: &str = "CustomLatteArts";

/// Errors from slot resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    /// The name is not one of the six save slots.
    #[error("Unknown save slot: {0:?}")]
    UnknownSlot(String),

    /// The platform's application data folder could not be determined.
    #[error("Could not locate the Espresso Tycoon GameState folder")]
    NoGameStateRoot,
}

/// One of the game's save slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SaveSlot {
    #[default]
    AutoSave,
    Save1,
    Save2,
    Save3,
    Save4,
    Save5,
}

impl SaveSlot {
    /// All slots in menu order.
    pub const ALL: [SaveSlot; 6] = [
        SaveSlot::AutoSave,
        SaveSlot::Save1,
        SaveSlot::Save2,
        SaveSlot::Save3,
        SaveSlot::Save4,
        SaveSlot::Save5,
    ];

    /// Name shown in the slot picker.
    pub fn display_name(self) -> &'static str {
        match self {
            SaveSlot::AutoSave => "Auto Save",
            SaveSlot::Save1 => "Save 1",
            SaveSlot::Save2 => "Save 2",
            SaveSlot::Save3 => "Save 3",
            SaveSlot::Save4 => "Save 4",
            SaveSlot::Save5 => "Save 5",
        }
    }

    /// Directory name under GameState.
    pub fn directory(self) -> &'static str {
        match self {
            SaveSlot::AutoSave => "Save_0",
            SaveSlot::Save1 => "Save_1",
            SaveSlot::Save2 => "Save_2",
            SaveSlot::Save3 => "Save_3",
            SaveSlot::Save4 => "Save_4",
            SaveSlot::Save5 => "Save_5",
        }
    }

    /// Look up a slot by its display name.
    pub fn from_name(name: &str) -> Result<Self, SlotError> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.display_name() == name)
            .ok_or_else(|| SlotError::UnknownSlot(name.to_string()))
    }
}

impl fmt::Display for SaveSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SaveSlot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Maps save slots to their latte art folders under a GameState root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotResolver {
    root: PathBuf,
}

impl SlotResolver {
    /// Resolve slots under an explicit GameState folder.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve slots under the game's standard GameState folder.
    pub fn for_current_platform() -> Result<Self, SlotError> {
        game_state_root()
            .map(Self::with_root)
            .ok_or(SlotError::NoGameStateRoot)
    }

    /// The GameState folder.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Latte art folder for `slot`.
    pub fn art_dir(&self, slot: SaveSlot) -> PathBuf {
        self.root.join(slot.directory()).join(ART_FOLDER)
    }

    /// Latte art folder for the slot with display name `slot_name`.
    pub fn resolve(&self, slot_name: &str) -> Result<PathBuf, SlotError> {
        Ok(self.art_dir(SaveSlot::from_name(slot_name)?))
    }
}

/// Platform location of Espresso Tycoon's GameState folder.
///
/// - Windows: `%APPDATA%\..\LocalLow\DreamWay Games\Espresso Tycoon\GameState`
/// - Elsewhere: `~/Library/Application Support/DreamWay Games/Espresso Tycoon/GameState`
pub fn game_state_root() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        dirs::data_dir()?.parent()?.join("LocalLow")
    } else {
        dirs::home_dir()?.join("Library").join("Application Support")
    };

    Some(
        base.join("DreamWay Games")
            .join("Espresso Tycoon")
            .join("GameState"),
    )
}
