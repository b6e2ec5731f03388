//! ER diagram database implementation
//!
//! Stores entities with their ordered attribute lists and the append-only
//! relationship sequence. One instance backs one diagram; construct a fresh
//! database for each parse/render cycle.
//!
//! The database deliberately performs no semantic validation: a relationship
//! may reference names no entity declaration has introduced yet (or ever).
//! Such references are stored as-is and left for the rendering collaborator
//! to resolve.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::DiagramMetadata;
use crate::er::ErConfig;

/// Key classification on an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKey {
    Primary, // PK
    Foreign, // FK
    Unique,  // UK
}

impl AttributeKey {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PK" => Some(AttributeKey::Primary),
            "FK" => Some(AttributeKey::Foreign),
            "UK" => Some(AttributeKey::Unique),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            AttributeKey::Primary => "PK",
            AttributeKey::Foreign => "FK",
            AttributeKey::Unique => "UK",
        }
    }
}

/// A single attribute row within an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Declared type, e.g. "string"
    pub attr_type: String,
    /// Attribute name
    pub name: String,
    /// Key classifications (PK/FK/UK), possibly several
    pub keys: Vec<AttributeKey>,
    /// Trailing comment text, if any
    pub comment: Option<String>,
}

impl Attribute {
    pub fn new(attr_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            attr_type: attr_type.into(),
            name: name.into(),
            keys: Vec::new(),
            comment: None,
        }
    }

    pub fn with_keys(mut self, keys: Vec<AttributeKey>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A named entity in the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Identifier used in relationship statements, unique per diagram
    pub name: String,
    /// Optional display name distinct from the identifier
    pub alias: Option<String>,
    /// Attributes in declaration order
    pub attributes: Vec<Attribute>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            attributes: Vec::new(),
        }
    }

    /// Name the renderer should display: the alias when set, otherwise the
    /// identifier itself
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Multiplicity constraint on one side of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
    OnlyOne,
    MdParent,
}

impl Cardinality {
    /// Parse a crow's foot symbol as written on either end of a
    /// relationship statement
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "|o" | "o|" => Some(Cardinality::ZeroOrOne),
            "}o" | "o{" => Some(Cardinality::ZeroOrMore),
            "}|" | "|{" => Some(Cardinality::OneOrMore),
            "||" => Some(Cardinality::OnlyOne),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::ZeroOrOne => "ZERO_OR_ONE",
            Cardinality::ZeroOrMore => "ZERO_OR_MORE",
            Cardinality::OneOrMore => "ONE_OR_MORE",
            Cardinality::OnlyOne => "ONLY_ONE",
            Cardinality::MdParent => "MD_PARENT",
        }
    }
}

/// Whether the child entity's identity depends on the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identification {
    Identifying,    // solid line
    NonIdentifying, // dashed line
}

impl Identification {
    pub fn as_str(self) -> &'static str {
        match self {
            Identification::Identifying => "IDENTIFYING",
            Identification::NonIdentifying => "NON_IDENTIFYING",
        }
    }
}

/// Cardinality pair plus identification marker for one relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardinalitySpec {
    /// Cardinality on the first entity's side
    pub cardinality_a: Cardinality,
    /// Cardinality on the second entity's side
    pub cardinality_b: Cardinality,
    pub identification: Identification,
}

impl CardinalitySpec {
    pub fn new(
        cardinality_a: Cardinality,
        cardinality_b: Cardinality,
        identification: Identification,
    ) -> Self {
        Self {
            cardinality_a,
            cardinality_b,
            identification,
        }
    }

    pub fn identifying(cardinality_a: Cardinality, cardinality_b: Cardinality) -> Self {
        Self::new(cardinality_a, cardinality_b, Identification::Identifying)
    }

    pub fn non_identifying(cardinality_a: Cardinality, cardinality_b: Cardinality) -> Self {
        Self::new(cardinality_a, cardinality_b, Identification::NonIdentifying)
    }
}

/// Relationship details: a cardinality pair, or the generalization marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelSpec {
    Cardinality(CardinalitySpec),
    /// Supertype/subtype ("is a") link, carries no cardinality
    IsA,
}

impl RelSpec {
    pub fn is_generalization(&self) -> bool {
        matches!(self, RelSpec::IsA)
    }
}

/// A declared association between two entities
///
/// Generalization relationships carry no roles; both role fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub entity_a: String,
    /// Role the first entity plays in relation to the second
    pub role_a: Option<String>,
    pub entity_b: String,
    /// Role the second entity plays in relation to the first
    pub role_b: Option<String>,
    pub spec: RelSpec,
}

impl Relationship {
    pub fn is_generalization(&self) -> bool {
        self.spec.is_generalization()
    }
}

/// ER diagram database
///
/// Entities are keyed by name; relationships keep exact declaration order,
/// duplicates included. The shared title/description metadata block is owned
/// here so `clear` resets the whole diagram in one call.
#[derive(Debug, Default)]
pub struct ErDatabase {
    entities: IndexMap<String, Entity>,
    relationships: Vec<Relationship>,
    metadata: DiagramMetadata,
    config: ErConfig,
}

impl ErDatabase {
    /// Create a new empty database with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty database carrying the given rendering config
    pub fn with_config(config: ErConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    fn entry(&mut self, name: &str) -> &mut Entity {
        self.entities.entry(name.to_string()).or_insert_with(|| {
            debug!(entity = %name, "Added new entity");
            Entity::new(name)
        })
    }

    /// Declare an entity, or merge into an existing declaration
    ///
    /// Creation is idempotent: re-declaring a name never replaces the stored
    /// record. The first non-empty alias wins; later aliases are ignored.
    pub fn add_entity(&mut self, name: &str, alias: Option<&str>) -> &Entity {
        let entity = self.entry(name);
        if entity.alias.is_none() {
            if let Some(alias) = alias.filter(|a| !a.is_empty()) {
                debug!(entity = %name, alias = %alias, "Added alias to entity");
                entity.alias = Some(alias.to_string());
            }
        }
        entity
    }

    /// Append attributes to an entity, creating a bare entity if the name is
    /// new
    ///
    /// `attributes` must be in declaration order; successive calls append
    /// after previously stored attributes.
    pub fn add_attributes(&mut self, name: &str, attributes: Vec<Attribute>) {
        let entity = self.entry(name);
        for attribute in attributes {
            trace!(entity = %name, attribute = %attribute.name, "Added attribute");
            entity.attributes.push(attribute);
        }
    }

    /// Append a cardinality relationship
    ///
    /// Neither endpoint is checked against the declared entities.
    pub fn add_relationship(
        &mut self,
        entity_a: &str,
        role_a: &str,
        entity_b: &str,
        role_b: &str,
        spec: CardinalitySpec,
    ) {
        let rel = Relationship {
            entity_a: entity_a.to_string(),
            role_a: Some(role_a.to_string()),
            entity_b: entity_b.to_string(),
            role_b: Some(role_b.to_string()),
            spec: RelSpec::Cardinality(spec),
        };
        trace!(relationship = ?rel, "Added new relationship");
        self.relationships.push(rel);
    }

    /// Append a generalization ("is a") relationship
    pub fn add_is_a_relationship(&mut self, entity_a: &str, entity_b: &str) {
        let rel = Relationship {
            entity_a: entity_a.to_string(),
            role_a: None,
            entity_b: entity_b.to_string(),
            role_b: None,
            spec: RelSpec::IsA,
        };
        trace!(relationship = ?rel, "Added generalization relationship");
        self.relationships.push(rel);
    }

    /// All entities, keyed by name in declaration order
    pub fn entities(&self) -> &IndexMap<String, Entity> {
        &self.entities
    }

    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// All relationships in the exact order they were added, duplicates
    /// included
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Rendering config this database was constructed with
    pub fn config(&self) -> &ErConfig {
        &self.config
    }

    pub fn set_acc_title(&mut self, title: impl Into<String>) {
        self.metadata.set_acc_title(title);
    }

    pub fn acc_title(&self) -> &str {
        self.metadata.acc_title()
    }

    pub fn set_acc_description(&mut self, description: impl Into<String>) {
        self.metadata.set_acc_description(description);
    }

    pub fn acc_description(&self) -> &str {
        self.metadata.acc_description()
    }

    pub fn set_diagram_title(&mut self, title: impl Into<String>) {
        self.metadata.set_diagram_title(title);
    }

    pub fn diagram_title(&self) -> &str {
        self.metadata.diagram_title()
    }

    /// Remove all entities, relationships, and shared metadata
    ///
    /// The rendering config is kept; it belongs to the pipeline, not to the
    /// accumulated diagram.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.relationships.clear();
        self.metadata.clear();
        debug!("Cleared ER database");
    }
}
