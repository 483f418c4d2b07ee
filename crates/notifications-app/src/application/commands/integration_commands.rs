use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::{CreateIntegrationInput, UpdateIntegrationInput};
use notifications_domain::integration::Integration;

// ============================================================
// Create Integration Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIntegrationCommand {
    pub input: CreateIntegrationInput,
}

impl Command for CreateIntegrationCommand {}

pub type CreateIntegrationResult = Integration;

// ============================================================
// Update Integration Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateIntegrationCommand {
    pub input: UpdateIntegrationInput,
}

impl Command for UpdateIntegrationCommand {}

pub type UpdateIntegrationResult = Integration;

// ============================================================
// Delete Integration Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteIntegrationCommand {
    pub integration_id: String,
}

impl Command for DeleteIntegrationCommand {}

pub type DeleteIntegrationResult = ();

// ============================================================
// Toggle Integration Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleIntegrationCommand {
    pub integration_id: String,
    pub enabled: bool,
}

impl Command for ToggleIntegrationCommand {}

pub type ToggleIntegrationResult = Integration;
