// Mon Oct 19 2026 - Alex

use crate::structure::{FieldLayout, Size, StructureError};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct StructureLayout {
    name: &'static str,
    size: Size,
    fields: Vec<FieldLayout>,
    #[serde(skip)]
    field_map: HashMap<&'static str, usize>,
}

impl StructureLayout {
    pub fn new(name: &'static str, size: Size) -> Self {
        Self {
            name,
            size,
            fields: Vec::new(),
            field_map: HashMap::new(),
        }
    }

    pub fn with_field(mut self, field: FieldLayout) -> Self {
        self.add_field(field);
        self
    }

    pub fn add_field(&mut self, field: FieldLayout) {
        let index = self.fields.len();
        self.field_map.insert(field.name(), index);
        self.fields.push(field);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    pub fn field(&self, name: &'static str) -> Result<&FieldLayout, StructureError> {
        self.field_map
            .get(name)
            .map(|&idx| &self.fields[idx])
            .ok_or(StructureError::FieldNotFound {
                structure: self.name,
                field: name,
            })
    }

    /// Checks that every recorded field lies inside the structure.
    pub fn validate(&self) -> Result<(), StructureError> {
        for field in &self.fields {
            if field.end() > self.size.as_usize() {
                return Err(StructureError::FieldOutOfBounds {
                    structure: self.name,
                    field: field.name(),
                    end: field.end(),
                    size: self.size.as_usize(),
                });
            }
        }
        Ok(())
    }
}
