//! Octree color quantization.
//!
//! Every pixel is inserted into an 8-level octree, one level per bit of the
//! red, green and blue channels. Leaves are then folded into their parents,
//! cheapest first, until no more than the requested number of nodes remain;
//! each survivor's mean color becomes a palette entry.

use crate::{Color, Error, Result, Surface};

type NodeId = usize;

const ROOT: NodeId = 0;
const LEVELS: u8 = 8;

#[derive(Debug, Default)]
struct OctNode {
    r: u64,
    g: u64,
    b: u64,
    count: u64,
    n_kids: u8,
    kid_idx: u8,
    depth: u8,
    kids: [Option<NodeId>; 8],
    parent: Option<NodeId>,
    mean: Option<Color>,
}

impl OctNode {
    /// Heap ordering: fewest children first, then least weight for the depth.
    fn key(&self) -> (u8, u64) {
        (self.n_kids, self.count >> self.depth)
    }
}

/// Octree nodes in an arena; the root is always at [`ROOT`].
#[derive(Debug)]
struct Octree {
    nodes: Vec<OctNode>,
}

/// Child slot for `color` at the level testing `bit`.
fn child_index(color: Color, bit: u8) -> usize {
    let test = |channel: u8| usize::from((channel >> bit) & 1);
    test(color.r()) << 2 | test(color.g()) << 1 | test(color.b())
}

impl Octree {
    fn new() -> Self {
        Self { nodes: vec![OctNode::default()] }
    }

    /// Adds `color` to its leaf, creating the path as needed. Returns the leaf.
    fn insert(&mut self, color: Color) -> NodeId {
        let mut id = ROOT;
        for depth in 1..=LEVELS {
            let slot = child_index(color, LEVELS - depth);
            id = match self.nodes[id].kids[slot] {
                Some(kid) => kid,
                None => self.add_child(id, slot, depth),
            };
        }

        let leaf = &mut self.nodes[id];
        leaf.r += u64::from(color.r());
        leaf.g += u64::from(color.g());
        leaf.b += u64::from(color.b());
        leaf.count += 1;
        id
    }

    fn add_child(&mut self, parent: NodeId, slot: usize, depth: u8) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(OctNode {
            kid_idx: slot as u8,
            depth,
            parent: Some(parent),
            ..OctNode::default()
        });

        let parent = &mut self.nodes[parent];
        parent.kids[slot] = Some(id);
        parent.n_kids += 1;
        id
    }

    /// Merges a childless node into its parent and detaches it.
    fn fold(&mut self, id: NodeId) -> Result<NodeId> {
        let node = &self.nodes[id];
        if node.n_kids > 0 {
            return Err(Error::invalid_state(format!(
                "octree node {id} still has {} children",
                node.n_kids
            )));
        }
        let Some(parent) = node.parent else {
            return Err(Error::invalid_state("cannot fold the octree root"));
        };

        let (r, g, b, count, slot) = (node.r, node.g, node.b, node.count, node.kid_idx);
        let parent_node = &mut self.nodes[parent];
        parent_node.r += r;
        parent_node.g += g;
        parent_node.b += b;
        parent_node.count += count;
        parent_node.n_kids -= 1;
        parent_node.kids[usize::from(slot)] = None;
        Ok(parent)
    }

    /// Stores the rounded mean color of `id`.
    fn resolve_mean(&mut self, id: NodeId) {
        let node = &mut self.nodes[id];
        let count = node.count.max(1);
        let mean = |sum: u64| ((2 * sum + count) / (2 * count)) as u8;
        node.mean = Some(Color::rgb(mean(node.r), mean(node.g), mean(node.b)));
    }

    /// The deepest surviving node on `color`'s path.
    fn lookup(&self, color: Color) -> NodeId {
        let mut id = ROOT;
        for depth in 1..=LEVELS {
            match self.nodes[id].kids[child_index(color, LEVELS - depth)] {
                Some(kid) => id = kid,
                None => break,
            }
        }
        id
    }
}

/// Binary min-heap of node ids keyed by [`OctNode::key`].
///
/// `slots[id]` tracks where each node sits so a node whose key changed can
/// be moved without searching.
#[derive(Debug, Default)]
struct NodeHeap {
    items: Vec<NodeId>,
    slots: Vec<Option<usize>>,
}

impl NodeHeap {
    fn len(&self) -> usize {
        self.items.len()
    }

    /// Inserts `id`, or repositions it if already present.
    fn push(&mut self, tree: &Octree, id: NodeId) {
        if id >= self.slots.len() {
            self.slots.resize(id + 1, None);
        }

        match self.slots[id] {
            Some(slot) => {
                let slot = self.sift_down(tree, slot);
                self.sift_up(tree, slot);
            }
            None => {
                self.items.push(id);
                let slot = self.items.len() - 1;
                self.slots[id] = Some(slot);
                self.sift_up(tree, slot);
            }
        }
    }

    fn pop(&mut self, tree: &Octree) -> Option<NodeId> {
        if self.items.is_empty() {
            return None;
        }
        let top = self.items.swap_remove(0);
        self.slots[top] = None;
        if let Some(&moved) = self.items.first() {
            self.slots[moved] = Some(0);
            self.sift_down(tree, 0);
        }
        Some(top)
    }

    fn less(&self, tree: &Octree, a: usize, b: usize) -> bool {
        tree.nodes[self.items[a]].key() < tree.nodes[self.items[b]].key()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.slots[self.items[a]] = Some(a);
        self.slots[self.items[b]] = Some(b);
    }

    fn sift_up(&mut self, tree: &Octree, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(tree, slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, tree: &Octree, mut slot: usize) -> usize {
        loop {
            let left = slot * 2 + 1;
            if left >= self.items.len() {
                break;
            }
            let right = left + 1;
            let child = if right < self.items.len() && self.less(tree, right, left) {
                right
            } else {
                left
            };
            if !self.less(tree, child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
        slot
    }
}

impl Surface {
    /// Returns a copy reduced to at most `n` colors.
    ///
    /// # Errors
    /// See [`Surface::quantize_in_place`]; additionally
    /// [`Error::OutOfMemory`] if the copy cannot be allocated.
    pub fn quantize(&self, n: usize) -> Result<Surface> {
        let mut out = self.copy()?;
        out.quantize_in_place(n)?;
        Ok(out)
    }

    /// Reduces the surface to at most `n` colors with octree quantization.
    ///
    /// Each pixel takes the rounded mean RGB of the octree node it ends up
    /// in and keeps its own alpha. A surface that already has `n` or fewer
    /// distinct RGB values is left unchanged.
    ///
    /// # Errors
    /// [`Error::InvalidParameters`] when `n` is zero, [`Error::InvalidState`]
    /// if the octree reduction breaks its own ordering.
    pub fn quantize_in_place(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::invalid_parameters("cannot quantize to 0 colors"));
        }

        let mut tree = Octree::new();
        let mut heap = NodeHeap::default();
        for &px in self.as_raw() {
            let leaf = tree.insert(Color(px));
            heap.push(&tree, leaf);
        }
        let leaves = heap.len();

        while heap.len() > n {
            let Some(cheapest) = heap.pop(&tree) else {
                break;
            };
            let parent = tree.fold(cheapest)?;
            heap.push(&tree, parent);
        }

        for &id in &heap.items {
            tree.resolve_mean(id);
        }

        for px in self.as_raw_mut() {
            let color = Color(*px);
            let node = tree.lookup(color);
            let Some(mean) = tree.nodes[node].mean else {
                return Err(Error::invalid_state(format!(
                    "octree node {node} has no palette entry"
                )));
            };
            *px = mean.with_alpha(color.a()).0;
        }

        tracing::debug!(
            colors = n,
            leaves,
            palette = heap.len(),
            nodes = tree.nodes.len(),
            "quantized surface"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn distinct_rgb(s: &Surface) -> HashSet<u32> {
        s.as_raw().iter().map(|&p| p & 0x00FF_FFFF).collect()
    }

    fn gradient() -> Surface {
        let mut s = Surface::new(16, 16).unwrap();
        s.passthru(|x, y, _| Color::from_i32_channels(x * 16, y * 16, (x + y) * 8, 255));
        s
    }

    #[test]
    fn few_colors_are_unchanged() {
        let mut s = Surface::new(3, 3).unwrap();
        s.fill(Color::RED);
        s.set_pixel(0, 0, Color::BLUE);
        s.set_pixel(2, 2, Color::rgb(12, 34, 56));

        assert_eq!(s.quantize(3).unwrap(), s);
        assert_eq!(s.quantize(100).unwrap(), s);
    }

    #[test]
    fn single_color_is_rounded_weighted_mean() {
        let mut s = Surface::new(4, 1).unwrap();
        s.fill(Color::rgb(10, 0, 100));
        s.set_pixel(3, 0, Color::rgb(20, 1, 101));

        s.quantize_in_place(1).unwrap();
        // r: 50 / 4 = 12.5 rounds up; g: 1 / 4 rounds down; b: 401 / 4 = 100.25
        let expected = Color::rgb(13, 0, 100);
        assert!(s.as_raw().iter().all(|&p| p == expected.0));
    }

    #[test]
    fn palette_is_bounded() {
        let s = gradient();
        assert!(distinct_rgb(&s).len() > 100);

        for n in [1, 2, 8, 32] {
            let q = s.quantize(n).unwrap();
            let colors = distinct_rgb(&q).len();
            assert!(colors <= n, "{colors} colors for n = {n}");
            assert!(colors >= 1);
        }
    }

    #[test]
    fn alpha_is_preserved() {
        let mut s = Surface::new(2, 1).unwrap();
        s.set_pixel(0, 0, Color::rgba(200, 0, 0, 40));
        s.set_pixel(1, 0, Color::rgba(0, 0, 200, 255));

        s.quantize_in_place(1).unwrap();
        assert_eq!(s.pixel(0, 0).a(), 40);
        assert_eq!(s.pixel(1, 0).a(), 255);
        assert_eq!(s.pixel(0, 0).with_alpha(255), s.pixel(1, 0));
    }

    #[test]
    fn zero_colors_is_rejected() {
        let mut s = gradient();
        assert!(matches!(s.quantize_in_place(0), Err(Error::InvalidParameters(_))));
    }

    #[test]
    fn heap_orders_by_children_then_weight() {
        let mut tree = Octree::new();
        let a = tree.insert(Color::rgb(0, 0, 0));
        tree.insert(Color::rgb(0, 0, 0));
        let b = tree.insert(Color::rgb(255, 255, 255));

        let mut heap = NodeHeap::default();
        heap.push(&tree, a);
        heap.push(&tree, b);
        heap.push(&tree, ROOT);

        // leaves weigh 2 and 1 but both shift to 0 at depth 8; the root has kids
        let first = heap.pop(&tree).unwrap();
        assert!(first == a || first == b);
        assert_eq!(heap.len(), 2);
        heap.pop(&tree).unwrap();
        assert_eq!(heap.pop(&tree), Some(ROOT));
        assert_eq!(heap.pop(&tree), None);
    }

    #[test]
    fn heap_repositions_updated_nodes() {
        let mut tree = Octree::new();
        let a = tree.insert(Color::BLACK);
        let b = tree.insert(Color::WHITE);

        let mut heap = NodeHeap::default();
        heap.push(&tree, a);
        heap.push(&tree, b);
        heap.push(&tree, a);
        assert_eq!(heap.len(), 2);

        // giving `a` a child pushes it behind `b`
        tree.add_child(a, 0, LEVELS);
        heap.push(&tree, a);
        assert_eq!(heap.pop(&tree), Some(b));
        assert_eq!(heap.pop(&tree), Some(a));
    }

    #[test]
    fn folding_rules() {
        let mut tree = Octree::new();
        let leaf = tree.insert(Color::RED);
        let parent = tree.nodes[leaf].parent.unwrap();

        assert!(matches!(tree.fold(parent), Err(Error::InvalidState(_))));
        assert_eq!(tree.fold(leaf).unwrap(), parent);
        assert_eq!(tree.nodes[parent].n_kids, 0);
        assert_eq!(tree.nodes[parent].count, 1);
        assert!(matches!(tree.fold(ROOT), Err(Error::InvalidState(_))));
    }
}
