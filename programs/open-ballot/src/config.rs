use anchor_lang::prelude::*;

/// How per-voter state is stored
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Keyed records paid for by each voter and refundable on release
    #[default]
    BoxStorage,
    /// Per-account local-state slots acquired by opting in
    LocalState,
}

/// Template parameters resolved once, when the ballot is created
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployParams {
    /// Version stamp returned by `version()` (Unix timestamp)
    pub version_unix: u64,

    /// Allow the creator to terminate the ballot
    pub deletable: bool,

    /// Confine voting and storage allocation to the poll window
    pub enforce_voting_window: bool,

    pub storage_mode: StorageMode,
}

impl Default for DeployParams {
    fn default() -> Self {
        Self {
            version_unix: 0,
            deletable: true,
            enforce_voting_window: true,
            storage_mode: StorageMode::BoxStorage,
        }
    }
}
