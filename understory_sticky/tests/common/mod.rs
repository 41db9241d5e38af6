// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory document implementing `StickyHost`, for integration tests.
//!
//! Layout is not computed: every node has a fixed top offset and height set
//! by the test. Width styles do feed back into the node's box so width
//! syncing and placeholder sizing can be observed.

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use kurbo::Size;
use understory_sticky::{ScrollSource, StickyHost, StickyId, StyleProperty, StyleValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    top: f64,
    natural_width: f64,
    width: f64,
    chrome: f64,
    height: f64,
    scroll_top: f64,
    styles: Vec<(StyleProperty, String)>,
    classes: Vec<String>,
    visible: bool,
    attached: bool,
}

#[derive(Debug)]
pub struct FakeDom {
    nodes: Vec<Node>,
    /// Document order of attached nodes.
    order: Vec<NodeId>,
    pub viewport_height: f64,
    pub viewport_scroll: f64,
    pub listeners: Vec<(ScrollSource<NodeId>, StickyId)>,
}

impl FakeDom {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            nodes: Vec::new(),
            order: Vec::new(),
            viewport_height,
            viewport_scroll: 0.0,
            listeners: Vec::new(),
        }
    }

    /// Appends a node with the given box at the end of the document.
    pub fn add(&mut self, parent: Option<NodeId>, top: f64, width: f64, height: f64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            top,
            natural_width: width,
            width,
            chrome: 0.0,
            height,
            scroll_top: 0.0,
            styles: Vec::new(),
            classes: Vec::new(),
            visible: true,
            attached: true,
        });
        self.order.push(id);
        id
    }

    /// Adds horizontal padding + border to a node's outer box.
    pub fn set_chrome(&mut self, id: NodeId, chrome: f64) {
        self.node_mut(id).chrome = chrome;
    }

    pub fn set_top(&mut self, id: NodeId, top: f64) {
        self.node_mut(id).top = top;
    }

    pub fn set_height(&mut self, id: NodeId, height: f64) {
        self.node_mut(id).height = height;
    }

    pub fn set_natural_width(&mut self, id: NodeId, width: f64) {
        let node = self.node_mut(id);
        node.natural_width = width;
        if !node.styles.iter().any(|(p, _)| *p == StyleProperty::Width) {
            node.width = width;
        }
    }

    pub fn set_element_scroll(&mut self, id: NodeId, scroll_top: f64) {
        self.node_mut(id).scroll_top = scroll_top;
    }

    /// The inline value of `property`, or `""` when unset.
    pub fn style(&self, id: NodeId, property: StyleProperty) -> String {
        self.node(id)
            .styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    pub fn has_inline_styles(&self, id: NodeId) -> bool {
        !self.node(id).styles.is_empty()
    }

    pub fn classes(&self, id: NodeId) -> Vec<String> {
        self.node(id).classes.clone()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn is_visible_node(&self, id: NodeId) -> bool {
        self.node(id).visible
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        self.node(id).attached
    }

    pub fn outer(&self, id: NodeId) -> Size {
        let node = self.node(id);
        Size::new(node.width + node.chrome, node.height)
    }

    /// The attached sibling following `id` in document order.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id).parent;
        let at = self.order.iter().position(|n| *n == id)?;
        self.order[at + 1..]
            .iter()
            .copied()
            .find(|n| self.node(*n).parent == parent)
    }

    /// Number of attached nodes carrying `class`.
    pub fn count_with_class(&self, class: &str) -> usize {
        self.order.iter().filter(|n| self.has_class(**n, class)).count()
    }

    pub fn attached_count(&self) -> usize {
        self.order.len()
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

impl StickyHost for FakeDom {
    type Element = NodeId;

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.node(*element).parent
    }

    fn top_offset(&self, element: &NodeId) -> f64 {
        self.node(*element).top
    }

    fn width(&self, element: &NodeId) -> f64 {
        self.node(*element).width
    }

    fn outer_size(&self, element: &NodeId) -> Size {
        self.outer(*element)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_top(&self, source: &ScrollSource<NodeId>) -> f64 {
        match source {
            ScrollSource::Viewport => self.viewport_scroll,
            ScrollSource::Element(id) => self.node(*id).scroll_top,
        }
    }

    fn set_style(&mut self, element: &NodeId, property: StyleProperty, value: StyleValue) {
        let node = self.node_mut(*element);
        node.styles.retain(|(p, _)| *p != property);
        if property == StyleProperty::Width {
            node.width = value.as_px().unwrap_or(node.natural_width);
        }
        if !value.is_unset() {
            node.styles.push((property, value.to_string()));
        }
    }

    fn set_class(&mut self, element: &NodeId, class: &str, enabled: bool) {
        let node = self.node_mut(*element);
        node.classes.retain(|c| c != class);
        if enabled {
            node.classes.push(class.to_owned());
        }
    }

    fn insert_placeholder(&mut self, after: &NodeId, class: &str) -> NodeId {
        let (parent, top) = {
            let node = self.node(*after);
            (node.parent, node.top)
        };
        let id = self.add(parent, top, 0.0, 0.0);
        self.order.pop();
        let at = self
            .order
            .iter()
            .position(|n| n == after)
            .expect("placeholder anchor is attached");
        self.order.insert(at + 1, id);
        self.node_mut(id).classes.push(class.to_owned());
        id
    }

    fn set_size(&mut self, element: &NodeId, size: Size) {
        let node = self.node_mut(*element);
        node.natural_width = size.width;
        node.width = size.width;
        node.height = size.height;
    }

    fn set_visible(&mut self, element: &NodeId, visible: bool) {
        self.node_mut(*element).visible = visible;
    }

    fn is_visible(&self, element: &NodeId) -> bool {
        self.node(*element).visible
    }

    fn remove(&mut self, element: &NodeId) {
        self.node_mut(*element).attached = false;
        self.order.retain(|n| n != element);
    }

    fn listen_scroll(&mut self, source: &ScrollSource<NodeId>, id: StickyId) {
        self.listeners.push((source.clone(), id));
    }

    fn unlisten_scroll(&mut self, source: &ScrollSource<NodeId>, id: StickyId) {
        self.listeners.retain(|(s, i)| !(s == source && *i == id));
    }
}

/// An 800px viewport with a 300px wide column at y=500, 2000px tall, holding
/// a 100px tall sidebar at its top.
pub fn column_page() -> (FakeDom, NodeId, NodeId) {
    let mut dom = FakeDom::new(800.0);
    let body = dom.add(None, 0.0, 1000.0, 3000.0);
    let column = dom.add(Some(body), 500.0, 300.0, 2000.0);
    let sidebar = dom.add(Some(column), 500.0, 300.0, 100.0);
    (dom, column, sidebar)
}
