//! Contract definition loader
//!
//! Definitions are stored one per file at `<data_dir>/contracts/contract_<id>.json`.
//! A host loads the directory at startup and picks the definition to serve; the
//! built-in catalog covers deployments that never touch disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{DefinitionError, DefinitionResult};
use super::types::ContractDefinition;

/// Loads contract definition files from disk and keeps an in-memory registry.
pub struct DefinitionLoader {
    /// Directory containing definition files
    contract_dir: PathBuf,
    /// Loaded definitions indexed by contract id
    definitions: HashMap<String, ContractDefinition>,
}

impl DefinitionLoader {
    /// Creates a loader for the given data directory.
    ///
    /// Definition files are expected at `<data_dir>/contracts/`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            contract_dir: data_dir.join("contracts"),
            definitions: HashMap::new(),
        }
    }

    /// Returns the contract directory path.
    pub fn contract_dir(&self) -> &Path {
        &self.contract_dir
    }

    /// Loads every `*.json` definition file in the contract directory.
    ///
    /// A missing directory is not an error; there is simply nothing to load.
    pub fn load_all(&mut self) -> DefinitionResult<()> {
        if !self.contract_dir.exists() {
            return Ok(());
        }

        let entries = fs::read_dir(&self.contract_dir)
            .map_err(|e| DefinitionError::Io(format!("Failed to read contract directory: {}", e)))?;

        for entry in entries {
            let entry = entry
                .map_err(|e| DefinitionError::Io(format!("Failed to read directory entry: {}", e)))?;
            let path = entry.path();

            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            self.load_definition_file(&path)?;
        }

        Ok(())
    }

    /// Loads a single definition file.
    fn load_definition_file(&mut self, path: &Path) -> DefinitionResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            DefinitionError::malformed(path.display().to_string(), format!("Failed to read file: {}", e))
        })?;

        let definition: ContractDefinition = serde_json::from_str(&content).map_err(|e| {
            DefinitionError::malformed(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        definition
            .validate_structure()
            .map_err(|reason| DefinitionError::malformed(path.display().to_string(), reason))?;

        self.definitions
            .insert(definition.contract_id.clone(), definition);

        Ok(())
    }

    /// Registers a definition directly (for testing or programmatic creation).
    ///
    /// Re-registering an id is rejected; definitions are immutable once known.
    pub fn register(&mut self, definition: ContractDefinition) -> DefinitionResult<()> {
        definition
            .validate_structure()
            .map_err(|reason| DefinitionError::invalid(&definition.contract_id, reason))?;

        if self.definitions.contains_key(&definition.contract_id) {
            return Err(DefinitionError::Duplicate(definition.contract_id));
        }

        self.definitions
            .insert(definition.contract_id.clone(), definition);
        Ok(())
    }

    /// Gets a definition by contract id.
    pub fn get(&self, contract_id: &str) -> Option<&ContractDefinition> {
        self.definitions.get(contract_id)
    }

    /// Checks whether a contract id is registered.
    pub fn exists(&self, contract_id: &str) -> bool {
        self.definitions.contains_key(contract_id)
    }

    /// Number of loaded definitions.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Saves a definition to its standard file location.
    pub fn save_definition(&self, definition: &ContractDefinition) -> DefinitionResult<PathBuf> {
        definition
            .validate_structure()
            .map_err(|reason| DefinitionError::invalid(&definition.contract_id, reason))?;

        let filename = format!("contract_{}.json", definition.contract_id);
        let path = self.contract_dir.join(&filename);

        if path.exists() {
            return Err(DefinitionError::Duplicate(definition.contract_id.clone()));
        }

        if !self.contract_dir.exists() {
            fs::create_dir_all(&self.contract_dir).map_err(|e| {
                DefinitionError::Io(format!("Failed to create contract directory: {}", e))
            })?;
        }

        let content = serde_json::to_string_pretty(definition)
            .expect("ContractDefinition serialization cannot fail");

        fs::write(&path, content).map_err(|e| {
            DefinitionError::malformed(path.display().to_string(), format!("Failed to write file: {}", e))
        })?;

        Ok(path)
    }
}
