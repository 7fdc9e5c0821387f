// Scene context: the overall renderable node list and the three semantic
// groups that own those nodes.
//
// A node is created through exactly one group and never moves, so group
// membership stays disjoint for the lifetime of the page. Groups carry the
// only visibility flag and the only rotation that change after startup.

use super::placement::{self, Placement, PlacementRequest};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Text,
    Toruses,
    Boxes,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [GroupKind::Text, GroupKind::Toruses, GroupKind::Boxes];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            GroupKind::Text => 0,
            GroupKind::Toruses => 1,
            GroupKind::Boxes => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupKind::Text => "text",
            GroupKind::Toruses => "toruses",
            GroupKind::Boxes => "boxes",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug)]
pub struct Node {
    pub group: GroupKind,
    pub placement: Placement,
}

#[derive(Clone, Debug)]
pub struct Group {
    pub kind: GroupKind,
    pub visible: bool,
    /// Euler XYZ rotation applied to every member.
    pub rotation: Vec3,
    members: Vec<NodeId>,
}

impl Group {
    fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            visible: true,
            rotation: Vec3::ZERO,
            members: Vec::new(),
        }
    }

    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ))
    }
}

/// Owner of all scene state that outlives a single frame.
#[derive(Clone, Debug)]
pub struct SceneContext {
    nodes: Vec<Node>,
    groups: [Group; 3],
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneContext {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            groups: GroupKind::ALL.map(Group::new),
        }
    }

    pub fn group(&self, kind: GroupKind) -> &Group {
        &self.groups[kind.index()]
    }

    pub fn group_mut(&mut self, kind: GroupKind) -> &mut Group {
        &mut self.groups[kind.index()]
    }

    pub fn set_visible(&mut self, kind: GroupKind, visible: bool) {
        self.group_mut(kind).visible = visible;
    }

    pub fn is_visible(&self, kind: GroupKind) -> bool {
        self.group(kind).visible
    }

    pub fn set_rotation(&mut self, kind: GroupKind, rotation: Vec3) {
        self.group_mut(kind).rotation = rotation;
    }

    /// Append a node to the overall scene and to the group of `kind`.
    pub fn add_node(&mut self, kind: GroupKind, placement: Placement) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            group: kind,
            placement,
        });
        self.groups[kind.index()].members.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn members(&self, kind: GroupKind) -> impl Iterator<Item = &Node> + '_ {
        self.group(kind)
            .members
            .iter()
            .filter_map(move |id| self.nodes.get(id.0))
    }

    /// Scatter primitives into `kind` and return how many were accepted.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        kind: GroupKind,
        rng: &mut R,
        req: &PlacementRequest,
    ) -> usize {
        let accepted = placement::populate(rng, req);
        let n = accepted.len();
        for p in accepted {
            self.add_node(kind, p);
        }
        n
    }

    /// World matrices for every member of `kind` (group rotation applied).
    pub fn world_transforms(&self, kind: GroupKind) -> Vec<Mat4> {
        self.world_transforms_iter(kind).collect()
    }

    pub fn world_transforms_iter(&self, kind: GroupKind) -> impl Iterator<Item = Mat4> + '_ {
        let group_m = self.group(kind).transform();
        self.members(kind).map(move |n| group_m * n.placement.model_matrix())
    }
}
