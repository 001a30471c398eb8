//! Ordered collections of same-variant references and their merge algebra.
//!
//! A collection never deduplicates: merging concatenates operands in argument
//! order and leaves every operand untouched. Duplicates and collisions are
//! only settled when the collection is flattened with
//! [`AttributeCollection::to_map`], using the aggregation rule of the
//! variant (see [`crate::reference::Aggregation`]).

use indexmap::IndexMap;

use crate::args::StimulusArg;
use crate::reference::{
    ActionRef, Aggregation, AttributeReference, ClassRef, ControllerRef, OutletRef,
    ReferenceContext, ReferenceKind, TargetRef, ValueRef,
};
use crate::StimulusResult;

/// Ordered list of references of one variant.
///
/// # Examples
///
/// ```
/// use stimulus_wiring::{AttributeCollection, ReferenceContext, TargetRef};
///
/// let ctx = ReferenceContext::with_scope("list");
/// let first = AttributeCollection::<TargetRef>::parse_all(["item"], &ctx)?;
/// let second = AttributeCollection::<TargetRef>::parse_all(["footer"], &ctx)?;
///
/// let merged = first.merge([&second]);
/// assert_eq!(merged.to_map().get("list-target").map(String::as_str), Some("item footer"));
/// assert_eq!(first.len(), 1);
/// # Ok::<_, stimulus_wiring::StimulusError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeCollection<R> {
    items: Vec<R>,
}

impl<R> Default for AttributeCollection<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: AttributeReference> AttributeCollection<R> {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Parse each argument list into a reference, in order.
    ///
    /// # Errors
    ///
    /// Returns the first parse failure; no partial collection is produced.
    pub fn parse_all<I, A>(args: I, ctx: &ReferenceContext) -> StimulusResult<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<crate::args::ReferenceArgs>,
    {
        let items = args
            .into_iter()
            .map(|a| R::parse(a.into().as_slice(), ctx))
            .collect::<StimulusResult<Vec<_>>>()?;
        Ok(Self { items })
    }

    /// Parse one reference from `args` and return a collection with it
    /// appended.
    ///
    /// # Errors
    ///
    /// Propagates the reference parse failure.
    pub fn append_args(&self, args: &[StimulusArg], ctx: &ReferenceContext) -> StimulusResult<Self> {
        Ok(self.append(R::parse(args, ctx)?))
    }

    /// Return a new collection with `reference` appended.
    #[must_use]
    pub fn append(&self, reference: R) -> Self {
        let mut items = self.items.clone();
        items.push(reference);
        Self { items }
    }

    /// Append in place. Used while a collection is being built.
    pub fn push(&mut self, reference: R) {
        self.items.push(reference);
    }

    /// Concatenate `self` with `others`, left to right, into a new collection.
    #[must_use]
    pub fn merge<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut items = self.items.clone();
        for other in others {
            items.extend(other.items.iter().cloned());
        }
        Self { items }
    }

    /// Like [`Self::merge`], but accepts erased collections and skips those
    /// holding another variant.
    #[must_use]
    pub fn merge_any<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a AnyCollection>,
    {
        let mut items = self.items.clone();
        for other in others {
            let Some(collection) = R::downcast_collection(other) else {
                tracing::debug!(
                    expected = %R::KIND,
                    found = %other.kind(),
                    "skipping collection of another reference kind"
                );
                continue;
            };
            items.extend(collection.items.iter().cloned());
        }
        Self { items }
    }

    /// Flatten into attribute key/value pairs using the variant's
    /// aggregation rule.
    ///
    /// Concatenating variants join non-blank values that share a key with a
    /// single space and omit keys whose joined value is empty. Overriding
    /// variants keep the last value for each key.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, String> {
        match R::KIND.aggregation() {
            Aggregation::Concatenate => self.concatenated(),
            Aggregation::Override => self.overridden(),
        }
    }

    fn concatenated(&self) -> IndexMap<String, String> {
        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
        for reference in &self.items {
            let (key, value) = reference.to_attribute_pair();
            let values = grouped.entry(key).or_default();
            if !value.trim().is_empty() {
                values.push(value);
            }
        }
        grouped
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, values)| (key, values.join(" ")))
            .collect()
    }

    fn overridden(&self) -> IndexMap<String, String> {
        self.items
            .iter()
            .map(AttributeReference::to_attribute_pair)
            .collect()
    }

    /// Iterate over the references in order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    /// Number of references held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R> FromIterator<R> for AttributeCollection<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, R> IntoIterator for &'a AttributeCollection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A collection of any variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyCollection {
    /// Controller references.
    Controllers(AttributeCollection<ControllerRef>),
    /// Action references.
    Actions(AttributeCollection<ActionRef>),
    /// Target references.
    Targets(AttributeCollection<TargetRef>),
    /// Outlet references.
    Outlets(AttributeCollection<OutletRef>),
    /// Value references.
    Values(AttributeCollection<ValueRef>),
    /// Class references.
    Classes(AttributeCollection<ClassRef>),
}

impl AnyCollection {
    /// The variant held.
    #[must_use]
    pub const fn kind(&self) -> ReferenceKind {
        match self {
            Self::Controllers(_) => ReferenceKind::Controller,
            Self::Actions(_) => ReferenceKind::Action,
            Self::Targets(_) => ReferenceKind::Target,
            Self::Outlets(_) => ReferenceKind::Outlet,
            Self::Values(_) => ReferenceKind::Value,
            Self::Classes(_) => ReferenceKind::Class,
        }
    }

    /// Flatten the held collection.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, String> {
        match self {
            Self::Controllers(c) => c.to_map(),
            Self::Actions(c) => c.to_map(),
            Self::Targets(c) => c.to_map(),
            Self::Outlets(c) => c.to_map(),
            Self::Values(c) => c.to_map(),
            Self::Classes(c) => c.to_map(),
        }
    }
}

macro_rules! any_collection_from {
    ($($variant:ident => $reference:ty),* $(,)?) => {
        $(
            impl From<AttributeCollection<$reference>> for AnyCollection {
                fn from(collection: AttributeCollection<$reference>) -> Self {
                    Self::$variant(collection)
                }
            }
        )*
    };
}

any_collection_from! {
    Controllers => ControllerRef,
    Actions => ActionRef,
    Targets => TargetRef,
    Outlets => OutletRef,
    Values => ValueRef,
    Classes => ClassRef,
}
