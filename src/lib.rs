//! Crowfoot - semantic data model for entity-relationship diagrams
//!
//! A library that accumulates the entities, attributes, and relationships
//! declared by an ER (crow's foot) diagram as an external parser walks the
//! source text, then hands the accumulated structure to a layout/rendering
//! stage. Parsing and rendering live in separate collaborators; this crate
//! is the shared data model between them.
//!
//! # Quick Start
//!
//! ```rust
//! use crowfoot::prelude::*;
//!
//! let mut db = ErDatabase::new();
//!
//! // A parser calls these as it recognizes statements
//! db.add_entity("CUSTOMER", None);
//! db.add_entity("ORDER", None);
//! db.add_relationship(
//!     "CUSTOMER",
//!     "places",
//!     "ORDER",
//!     "placed by",
//!     CardinalitySpec::identifying(Cardinality::OnlyOne, Cardinality::ZeroOrMore),
//! );
//!
//! // A renderer reads the result back
//! assert_eq!(db.entity_count(), 2);
//! assert_eq!(db.relationship_count(), 1);
//! ```
//!
//! # Attributes
//!
//! Entities carry an ordered attribute list. Attributes are appended in
//! declaration order, across any number of calls:
//!
//! ```rust
//! use crowfoot::prelude::*;
//!
//! let mut db = ErDatabase::new();
//! db.add_attributes(
//!     "CUSTOMER",
//!     vec![
//!         Attribute::new("string", "name"),
//!         Attribute::new("string", "custNumber").with_keys(vec![AttributeKey::Primary]),
//!     ],
//! );
//!
//! let customer = db.get_entity("CUSTOMER").unwrap();
//! assert_eq!(customer.attributes.len(), 2);
//! assert_eq!(customer.attributes[0].name, "name");
//! ```

pub mod core;
pub mod er;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{DiagramError, DiagramMetadata, LogFormat};
    pub use crate::er::{
        Attribute, AttributeKey, Cardinality, CardinalitySpec, Entity, ErConfig, ErDatabase,
        Identification, LayoutDirection, RelSpec, Relationship,
    };
}
