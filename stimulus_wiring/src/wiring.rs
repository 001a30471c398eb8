//! Per-element wiring and layered composition.
//!
//! An element's wiring comes from up to three layers, merged in order: the
//! component type's declarations, the instance, and the render site. Because
//! layers are merged with [`AttributeCollection::merge`], concatenating
//! variants list earlier layers first while overriding variants let later
//! layers win.

use crate::assemble::{DataAttributeAssembler, DataAttributes};
use crate::collection::{AnyCollection, AttributeCollection};
use crate::declarative::ResolvedDeclarations;
use crate::reference::{
    ActionRef, AttributeReference, ClassRef, ControllerRef, OutletRef, ReferenceContext,
    TargetRef, ValueRef,
};
use crate::StimulusResult;

/// The six collections wired onto one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StimulusWiring {
    /// Controller references.
    pub controllers: AttributeCollection<ControllerRef>,
    /// Action references.
    pub actions: AttributeCollection<ActionRef>,
    /// Target references.
    pub targets: AttributeCollection<TargetRef>,
    /// Outlet references.
    pub outlets: AttributeCollection<OutletRef>,
    /// Value references.
    pub values: AttributeCollection<ValueRef>,
    /// Class references.
    pub classes: AttributeCollection<ClassRef>,
}

impl StimulusWiring {
    /// Empty wiring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse resolved declarations into wiring.
    ///
    /// The implied controller is added when `ctx` has an implied scope, so an
    /// element always carries its own controller.
    ///
    /// # Errors
    ///
    /// Propagates the first reference parse failure.
    pub fn from_declarations(
        resolved: &ResolvedDeclarations,
        ctx: &ReferenceContext,
    ) -> StimulusResult<Self> {
        let controllers = if ctx.implied_scope().is_some() {
            AttributeCollection::new().append(ControllerRef::parse(&[], ctx)?)
        } else {
            AttributeCollection::new()
        };
        Ok(Self {
            controllers,
            actions: resolved.action_collection(ctx)?,
            targets: resolved.target_collection(ctx)?,
            outlets: resolved.outlet_collection(ctx)?,
            values: resolved.value_collection(ctx)?,
            classes: resolved.class_collection(ctx)?,
        })
    }

    /// Merge `self` with `others`, left to right, variant by variant.
    #[must_use]
    pub fn merge<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let operands: Vec<&Self> = others.into_iter().collect();
        Self {
            controllers: self.controllers.merge(operands.iter().map(|w| &w.controllers)),
            actions: self.actions.merge(operands.iter().map(|w| &w.actions)),
            targets: self.targets.merge(operands.iter().map(|w| &w.targets)),
            outlets: self.outlets.merge(operands.iter().map(|w| &w.outlets)),
            values: self.values.merge(operands.iter().map(|w| &w.values)),
            classes: self.classes.merge(operands.iter().map(|w| &w.classes)),
        }
    }

    /// Add an erased collection to the matching variant.
    #[must_use]
    pub fn with_collection(&self, collection: &AnyCollection) -> Self {
        let operand = std::slice::from_ref(collection);
        Self {
            controllers: self.controllers.merge_any(operand),
            actions: self.actions.merge_any(operand),
            targets: self.targets.merge_any(operand),
            outlets: self.outlets.merge_any(operand),
            values: self.values.merge_any(operand),
            classes: self.classes.merge_any(operand),
        }
    }

    /// Assemble the `data-*` attribute map.
    #[must_use]
    pub fn to_data_attributes(&self) -> DataAttributes {
        DataAttributeAssembler::assemble(
            &self.controllers,
            &self.actions,
            &self.targets,
            &self.outlets,
            &self.values,
            &self.classes,
        )
    }
}

/// Origin of a wiring layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum WiringProvenance {
    /// Class-level declarations.
    Declared,
    /// Wiring supplied to the instance.
    Instance,
    /// Wiring supplied where the element is rendered.
    RenderSite,
}

/// One layer of wiring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WiringLayer {
    provenance: WiringProvenance,
    wiring: StimulusWiring,
}

impl WiringLayer {
    /// Create a layer.
    #[must_use]
    pub const fn new(provenance: WiringProvenance, wiring: StimulusWiring) -> Self {
        Self { provenance, wiring }
    }

    /// The layer's origin.
    #[must_use]
    pub const fn provenance(&self) -> WiringProvenance {
        self.provenance
    }

    /// The layer's wiring.
    #[must_use]
    pub const fn wiring(&self) -> &StimulusWiring {
        &self.wiring
    }
}

/// Accumulates wiring layers and merges them in push order.
///
/// ```
/// use stimulus_wiring::{
///     AttributeCollection, ReferenceContext, StimulusWiring, ValueRef, WiringComposer,
/// };
///
/// let ctx = ReferenceContext::with_scope("card");
/// let declared = StimulusWiring {
///     values: AttributeCollection::<ValueRef>::parse_all([("size", "sm")], &ctx)?,
///     ..StimulusWiring::default()
/// };
/// let render_site = StimulusWiring {
///     values: AttributeCollection::<ValueRef>::parse_all([("size", "lg")], &ctx)?,
///     ..StimulusWiring::default()
/// };
///
/// let mut composer = WiringComposer::new();
/// composer.push_declared(declared);
/// composer.push_render_site(render_site);
/// let data = composer.compose().to_data_attributes();
/// assert_eq!(data.get("card-size-value"), Some("lg"));
/// # Ok::<_, stimulus_wiring::StimulusError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct WiringComposer {
    layers: Vec<WiringLayer>,
}

impl WiringComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Push a declarations layer.
    pub fn push_declared(&mut self, wiring: StimulusWiring) {
        self.push_layer(WiringLayer::new(WiringProvenance::Declared, wiring));
    }

    /// Push an instance layer.
    pub fn push_instance(&mut self, wiring: StimulusWiring) {
        self.push_layer(WiringLayer::new(WiringProvenance::Instance, wiring));
    }

    /// Push a render-site layer.
    pub fn push_render_site(&mut self, wiring: StimulusWiring) {
        self.push_layer(WiringLayer::new(WiringProvenance::RenderSite, wiring));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: WiringLayer) {
        self.layers.push(layer);
    }

    /// Borrow the accumulated layers.
    #[must_use]
    pub fn layers(&self) -> &[WiringLayer] {
        &self.layers
    }

    /// Merge every layer in push order.
    #[must_use]
    pub fn compose(&self) -> StimulusWiring {
        StimulusWiring::new().merge(self.layers.iter().map(WiringLayer::wiring))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{StimulusWiring, WiringComposer, WiringProvenance};
    use crate::collection::{AnyCollection, AttributeCollection};
    use crate::declarative::ResolvedDeclarations;
    use crate::reference::{ActionRef, ReferenceContext, TargetRef};

    #[fixture]
    fn ctx() -> ReferenceContext {
        ReferenceContext::with_scope("menus/menu_component")
    }

    fn actions(names: &[&str], ctx: &ReferenceContext) -> StimulusWiring {
        StimulusWiring {
            actions: AttributeCollection::<ActionRef>::parse_all(names.iter().copied(), ctx)
                .expect("actions parse"),
            ..StimulusWiring::default()
        }
    }

    #[rstest]
    fn layers_concatenate_in_push_order(ctx: ReferenceContext) {
        let mut composer = WiringComposer::new();
        composer.push_render_site(actions(&["close"], &ctx));
        composer.push_declared(actions(&["open"], &ctx));
        composer.push_instance(actions(&["toggle"], &ctx));

        let provenances: Vec<_> = composer.layers().iter().map(|l| l.provenance()).collect();
        assert_eq!(
            provenances,
            vec![
                WiringProvenance::RenderSite,
                WiringProvenance::Declared,
                WiringProvenance::Instance
            ]
        );
        let data = composer.compose().to_data_attributes();
        assert_eq!(
            data.get("action"),
            Some("menus--menu-component#close menus--menu-component#open menus--menu-component#toggle")
        );
    }

    #[rstest]
    fn declarations_bring_the_implied_controller(ctx: ReferenceContext) {
        let resolved = ResolvedDeclarations {
            targets: vec!["item".into()],
            ..ResolvedDeclarations::default()
        };
        let wiring = StimulusWiring::from_declarations(&resolved, &ctx).expect("wiring builds");
        let data = wiring.to_data_attributes();
        assert_eq!(data.get("controller"), Some("menus--menu-component"));
        assert_eq!(data.get("menus--menu-component-target"), Some("item"));
    }

    #[test]
    fn declarations_without_scope_have_no_controller() {
        let wiring = StimulusWiring::from_declarations(
            &ResolvedDeclarations::default(),
            &ReferenceContext::new(),
        )
        .expect("empty wiring");
        assert!(wiring.to_data_attributes().is_empty());
    }

    #[rstest]
    fn erased_collections_land_in_their_variant(ctx: ReferenceContext) {
        let targets = AttributeCollection::<TargetRef>::parse_all(["row"], &ctx).expect("target");
        let wiring = StimulusWiring::new().with_collection(&AnyCollection::from(targets));
        assert_eq!(wiring.targets.len(), 1);
        assert!(wiring.actions.is_empty());
    }
}
