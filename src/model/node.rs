//! 标签节点（Tagged Node）：以 JSON 形式表示的 NBT 树节点 `{name, value, type}`
//!
//! 列表（list）与复合（compound）都用子节点数组表示，`type` 只是原样回写的标签码。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// NBT 标签码（不做语义解释，只需原样输出）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagType(pub i32);

impl TagType {
    pub const BYTE: TagType = TagType(1);
    pub const SHORT: TagType = TagType(2);
    pub const INT: TagType = TagType(3);
    pub const LONG: TagType = TagType(4);
    pub const FLOAT: TagType = TagType(5);
    pub const STRING: TagType = TagType(8);
    pub const LIST: TagType = TagType(9);
    pub const COMPOUND: TagType = TagType(10);
}

/// 节点值
///
/// 反序列化按顺序尝试各变体；`Mixed` 保存夹杂非节点元素的数组，
/// `Other` 兜底保存任何无法识别的 JSON，保证自定义节点可以逐字节回写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeValue {
    Int(i64),
    /// 超出 i64 的无符号整数
    UInt(u64),
    Float(f64),
    String(String),
    Array(Vec<TaggedNode>),
    Mixed(Vec<ListEntry>),
    Other(Value),
}

impl Default for NodeValue {
    fn default() -> Self {
        NodeValue::Other(Value::Null)
    }
}

impl NodeValue {
    /// 子节点数组（仅当值为纯节点数组时）
    pub fn as_array(&self) -> Option<&[TaggedNode]> {
        match self {
            NodeValue::Array(children) => Some(children),
            _ => None,
        }
    }

    /// 任意数组值的视图（含夹杂非节点元素的数组）
    pub fn as_view(&self) -> Option<ArrayView<'_>> {
        match self {
            NodeValue::Array(children) => Some(ArrayView::Nodes(children)),
            NodeValue::Mixed(entries) => Some(ArrayView::Mixed(entries)),
            _ => None,
        }
    }

    /// 宽松读取整数：非整数值返回 None
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            NodeValue::Int(n) => i32::try_from(n).ok(),
            NodeValue::UInt(n) => i32::try_from(n).ok(),
            NodeValue::Float(f) if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 => {
                Some(f as i32)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i32> for NodeValue {
    fn from(n: i32) -> Self {
        NodeValue::Int(n as i64)
    }
}

impl From<i64> for NodeValue {
    fn from(n: i64) -> Self {
        NodeValue::Int(n)
    }
}

impl From<f64> for NodeValue {
    fn from(f: f64) -> Self {
        NodeValue::Float(f)
    }
}

impl From<&str> for NodeValue {
    fn from(s: &str) -> Self {
        NodeValue::String(s.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(s: String) -> Self {
        NodeValue::String(s)
    }
}

impl From<Vec<TaggedNode>> for NodeValue {
    fn from(children: Vec<TaggedNode>) -> Self {
        NodeValue::Array(children)
    }
}

/// 通用树节点，序列化键顺序固定为 name / value / type
///
/// 三个键缺一不可且不允许多余的键；不符合的对象按原样保存在外层的 `Mixed`/`Other` 中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaggedNode {
    pub name: String,
    pub value: NodeValue,
    #[serde(rename = "type")]
    pub tag: TagType,
}

impl TaggedNode {
    /// 子节点数组（非纯节点数组视为空）
    pub fn children(&self) -> &[TaggedNode] {
        self.value.as_array().unwrap_or(&[])
    }

    /// 值的数组视图（非数组视为空）
    pub fn elements(&self) -> ArrayView<'_> {
        self.value.as_view().unwrap_or_default()
    }
}

/// 混合数组中的一个元素：合法节点，或原样保留的任意 JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEntry {
    Node(TaggedNode),
    Raw(Value),
}

impl ListEntry {
    pub fn as_node(&self) -> Option<&TaggedNode> {
        self.as_entry_ref().node()
    }

    pub fn as_entry_ref(&self) -> EntryRef<'_> {
        match self {
            ListEntry::Node(node) => EntryRef::Node(node),
            ListEntry::Raw(value) => EntryRef::Raw(value),
        }
    }
}

impl From<TaggedNode> for ListEntry {
    fn from(node: TaggedNode) -> Self {
        ListEntry::Node(node)
    }
}

/// 数组元素的借用形式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryRef<'a> {
    Node(&'a TaggedNode),
    Raw(&'a Value),
}

impl<'a> EntryRef<'a> {
    pub fn node(self) -> Option<&'a TaggedNode> {
        match self {
            EntryRef::Node(node) => Some(node),
            EntryRef::Raw(_) => None,
        }
    }

    /// 转为拥有所有权的元素
    pub fn to_owned_entry(self) -> ListEntry {
        match self {
            EntryRef::Node(node) => ListEntry::Node(node.clone()),
            EntryRef::Raw(value) => ListEntry::Raw(value.clone()),
        }
    }
}

/// 数组值的只读视图
#[derive(Debug, Clone, Copy)]
pub enum ArrayView<'a> {
    Nodes(&'a [TaggedNode]),
    Mixed(&'a [ListEntry]),
}

impl Default for ArrayView<'_> {
    fn default() -> Self {
        ArrayView::Nodes(&[])
    }
}

impl<'a> From<&'a [TaggedNode]> for ArrayView<'a> {
    fn from(nodes: &'a [TaggedNode]) -> Self {
        ArrayView::Nodes(nodes)
    }
}

impl<'a> From<&'a Vec<TaggedNode>> for ArrayView<'a> {
    fn from(nodes: &'a Vec<TaggedNode>) -> Self {
        ArrayView::Nodes(nodes)
    }
}

impl<'a> ArrayView<'a> {
    pub fn len(&self) -> usize {
        match self {
            ArrayView::Nodes(nodes) => nodes.len(),
            ArrayView::Mixed(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按顺序逐个元素
    pub fn entries(self) -> impl Iterator<Item = EntryRef<'a>> {
        let (nodes, mixed): (&'a [TaggedNode], &'a [ListEntry]) = match self {
            ArrayView::Nodes(nodes) => (nodes, &[] as &[ListEntry]),
            ArrayView::Mixed(entries) => (&[] as &[TaggedNode], entries),
        };
        nodes.iter().map(EntryRef::Node).chain(mixed.iter().map(ListEntry::as_entry_ref))
    }

    /// 只取节点元素
    pub fn nodes(self) -> impl Iterator<Item = &'a TaggedNode> {
        self.entries().filter_map(EntryRef::node)
    }
}

/// 构造节点，不做任何校验
pub fn make_node(name: &str, value: impl Into<NodeValue>, tag: TagType) -> TaggedNode {
    TaggedNode {
        name: name.to_string(),
        value: value.into(),
        tag,
    }
}

/// 在任意深度查找名为 `target` 的数组节点，深度优先、从左到右，先命中者胜出
///
/// 非节点元素跳过；直接命中时立即返回（即使数组为空）；子树中的空结果视为未命中，继续扫描兄弟节点。
pub fn find_array_by_name<'a>(nodes: impl Into<ArrayView<'a>>, target: &str) -> ArrayView<'a> {
    let nodes: ArrayView<'a> = nodes.into();
    for node in nodes.nodes() {
        let Some(children) = node.value.as_view() else {
            continue;
        };
        if node.name == target {
            return children;
        }
        let found = find_array_by_name(children, target);
        if !found.is_empty() {
            return found;
        }
    }
    ArrayView::default()
}
