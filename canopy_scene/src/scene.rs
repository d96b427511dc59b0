// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use canopy_selection::{Candidate, Selection, cycle_target};
use canopy_shapes::{Painter, Primitive};
use kurbo::{Point, Vec2};

use crate::object::SceneObject;
use crate::types::{ObjectId, ObjectInteractions, PrimitiveId};

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    object: Option<SceneObject>,
}

/// The objects of a canvas, their draw order, and the selection.
///
/// Objects are addressed by [`ObjectId`]. Every object in the selection is
/// alive, visible, and flagged as selected; every other object is not. Both
/// sides are updated together on each operation.
#[derive(Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    order: Vec<ObjectId>,
    selection: Selection<ObjectId>,
    updating: bool,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if `id` refers to a live object.
    #[must_use]
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the object for `id`.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.object.as_ref()
    }

    /// Returns the object for `id` mutably.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.object.as_mut()
    }

    /// Iterates live objects in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.get(id).map(|obj| (id, obj)))
    }

    /// Adds an object and returns its id.
    ///
    /// The object's selected flag is cleared. Outside an update batch the
    /// draw order is re-sorted immediately.
    pub fn insert(&mut self, mut object: SceneObject) -> ObjectId {
        object.set_selected(false);
        let id = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.object = Some(object);
            ObjectId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 1,
                object: Some(object),
            });
            ObjectId::new(idx, 1)
        };
        self.order.push(id);
        tracing::trace!(?id, updating = self.updating, "object added");
        if !self.updating {
            self.sort();
        }
        id
    }

    /// Removes an object, deselecting it first. Returns it if `id` was live.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        let mut object = slot.object.take()?;
        object.set_selected(false);
        self.selection.remove(&id);
        self.order.retain(|&o| o != id);
        self.free_list.push(id.0);
        tracing::trace!(?id, "object removed");
        Some(object)
    }

    /// Removes every object and empties the selection.
    pub fn clear(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.object.take().is_some() {
                self.free_list.push(u32::try_from(idx).unwrap_or(u32::MAX));
            }
        }
        self.order.clear();
        self.selection.clear();
        tracing::trace!("scene cleared");
    }

    /// Starts a batch: inserts no longer re-sort until [`Scene::end_update`].
    pub fn begin_update(&mut self) {
        self.updating = true;
    }

    /// Ends a batch and re-sorts the draw order.
    pub fn end_update(&mut self) {
        self.updating = false;
        self.sort();
    }

    /// Returns `true` while an update batch is open.
    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Stable sort by draw order, so equal keys keep insertion order.
    fn sort(&mut self) {
        let slots = &self.slots;
        self.order.sort_by_key(|id| {
            slots[id.idx()]
                .object
                .as_ref()
                .map_or(0, SceneObject::draw_order)
        });
        tracing::trace!(objects = self.order.len(), "draw order sorted");
    }

    /// Shows or hides an object. Hiding deselects it. Returns `false` if `id`
    /// is stale.
    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> bool {
        let Some(object) = self.get_mut(id) else {
            return false;
        };
        object.set_visible(visible);
        if !visible {
            object.set_selected(false);
            self.selection.remove(&id);
        }
        true
    }

    /// Visible objects containing `pt` for which `filter` holds, ordered by
    /// ascending priority. Equal priorities keep draw order.
    pub fn objects_at(
        &self,
        pt: Point,
        mut filter: impl FnMut(&SceneObject) -> bool,
    ) -> Vec<ObjectId> {
        let mut hits: Vec<(ObjectId, i32)> = self
            .iter()
            .filter(|(_, obj)| obj.is_visible() && obj.contains(pt) && filter(obj))
            .map(|(id, obj)| (id, obj.priority()))
            .collect();
        hits.sort_by_key(|&(_, priority)| priority);
        hits.into_iter().map(|(id, _)| id).collect()
    }

    /// The first visible object in draw order containing `pt`.
    #[must_use]
    pub fn first_object_at(&self, pt: Point) -> Option<ObjectId> {
        self.iter()
            .find(|(_, obj)| obj.is_visible() && obj.contains(pt))
            .map(|(id, _)| id)
    }

    /// The first object in draw order for which `predicate` holds.
    pub fn find(&self, mut predicate: impl FnMut(&SceneObject) -> bool) -> Option<ObjectId> {
        self.iter().find(|(_, obj)| predicate(obj)).map(|(id, _)| id)
    }

    /// Resolves a primitive handle.
    #[must_use]
    pub fn primitive(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.get(id.object)?.primitive(id.index)
    }

    /// The first primitive containing `pt` on the first visible object that
    /// contains it.
    #[must_use]
    pub fn primitive_at(&self, pt: Point) -> Option<PrimitiveId> {
        let object = self.first_object_at(pt)?;
        let index = self.get(object)?.primitive_index_at(pt)?;
        Some(PrimitiveId { object, index })
    }

    /// The selectable object a click at `pt` should select, cycling through
    /// stacked objects on repeated clicks.
    ///
    /// Does not change the selection. Returns `None` if no selectable object
    /// is under the point.
    #[must_use]
    pub fn pick(&self, pt: Point, ignore_priority: bool) -> Option<ObjectId> {
        let candidates: Vec<Candidate<ObjectId>> = self
            .objects_at(pt, |obj| obj.is(ObjectInteractions::SELECTABLE))
            .into_iter()
            .filter_map(|id| {
                let obj = self.get(id)?;
                Some(Candidate::new(id, obj.priority(), obj.is_selected()))
            })
            .collect();
        let idx = cycle_target(&candidates, ignore_priority)?;
        Some(candidates[idx].key)
    }

    /// Selects an object, either alone or added to the current selection.
    ///
    /// Stale ids and hidden objects are ignored. Returns `true` if the object
    /// ended up selected.
    pub fn select(&mut self, id: ObjectId, add: bool) -> bool {
        match self.get(id) {
            Some(obj) if obj.is_visible() => {}
            _ => return false,
        }
        if !add {
            self.clear_selection();
        }
        if let Some(obj) = self.get_mut(id) {
            obj.set_selected(true);
        }
        self.selection.add(id);
        true
    }

    /// Deselects an object. Returns `true` if it was selected.
    pub fn unselect(&mut self, id: ObjectId) -> bool {
        if let Some(obj) = self.get_mut(id) {
            obj.set_selected(false);
        }
        self.selection.remove(&id)
    }

    /// Deselects everything, clearing each object's flag first.
    pub fn clear_selection(&mut self) {
        let selected = core::mem::take(&mut self.selection);
        for &id in selected.iter() {
            if let Some(obj) = self.get_mut(id) {
                obj.set_selected(false);
            }
        }
        self.selection = selected;
        self.selection.clear();
    }

    /// The selected objects, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[ObjectId] {
        self.selection.items()
    }

    /// Number of selected objects.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selection.contains(&id)
    }

    /// A counter that changes whenever the selection does.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection.revision()
    }

    /// Moves every selected object that has `interactions`, returning how
    /// many moved.
    pub fn translate_selected(&mut self, interactions: ObjectInteractions, delta: Vec2) -> usize {
        self.for_each_selected(interactions, |obj| obj.move_by(delta))
    }

    /// Rotates every selected object that has `interactions` around its own
    /// position, returning how many rotated.
    pub fn rotate_selected(&mut self, interactions: ObjectInteractions, radians: f64) -> usize {
        self.for_each_selected(interactions, |obj| obj.rotate(radians))
    }

    /// Selected objects that have any of `interactions`.
    pub fn selected_with(
        &self,
        interactions: ObjectInteractions,
    ) -> impl Iterator<Item = ObjectId> + '_ {
        self.selection
            .iter()
            .copied()
            .filter(move |&id| self.get(id).is_some_and(|obj| obj.is(interactions)))
    }

    fn for_each_selected(
        &mut self,
        interactions: ObjectInteractions,
        mut f: impl FnMut(&mut SceneObject),
    ) -> usize {
        let selected = core::mem::take(&mut self.selection);
        let mut count = 0;
        for &id in selected.iter() {
            if let Some(obj) = self.get_mut(id)
                && obj.is(interactions)
            {
                f(obj);
                count += 1;
            }
        }
        self.selection = selected;
        count
    }

    /// Draws every visible object in draw order.
    pub fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P, scale: f64, invert_height: f64) {
        for &id in &self.order {
            if let Some(obj) = self.slots[id.idx()].object.as_mut() {
                obj.draw(painter, scale, invert_height);
            }
        }
    }
}
