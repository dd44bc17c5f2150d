//! Canonical JSON form of a diff tree.
//!
//! Every directory serializes as `{"type": "dir", "dirType": ...,
//! "descendants": [...]}` where `descendants` holds the node's records first
//! (in insertion order) and then its child directories (recursively), and
//! every record serializes as `{"type": "object", "leftValue": ...,
//! "rightValue": ..., "kind": ..., "valueKind": ...}`. Parsing a serialized
//! tree reproduces an identical tree for every field the schema defines;
//! `reason` is not part of the wire form and parses back empty.

use std::io;

use serde::{Deserialize, Serialize};

use crate::directory::Directory;
use crate::error::{TreeError, TreeResult};
use crate::record::{Record, RecordKind};

/// Wire form of one tree node, discriminated by the `type` field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
enum Node {
    #[serde(rename = "dir")]
    Dir {
        #[serde(rename = "dirType")]
        dir_type: String,
        descendants: Vec<Node>,
    },
    #[serde(rename = "object")]
    Object {
        #[serde(rename = "leftValue")]
        left_value: String,
        #[serde(rename = "rightValue")]
        right_value: String,
        kind: RecordKind,
        #[serde(rename = "valueKind")]
        value_kind: String,
    },
}

fn directory_to_node(dir: &Directory) -> Node {
    let mut descendants =
        Vec::with_capacity(dir.records().len() + dir.directories().len());
    for record in dir.records() {
        descendants.push(record_to_node(record));
    }
    for child in dir.directories() {
        descendants.push(directory_to_node(child));
    }
    Node::Dir {
        dir_type: dir.dir_type().to_string(),
        descendants,
    }
}

fn record_to_node(record: &Record) -> Node {
    Node::Object {
        left_value: record.left().to_string(),
        right_value: record.right().to_string(),
        kind: record.kind(),
        value_kind: record.value_kind().to_string(),
    }
}

fn node_to_directory(node: Node) -> TreeResult<Directory> {
    match node {
        Node::Dir {
            dir_type,
            descendants,
        } => {
            let mut dir = Directory::new(dir_type);
            for child in descendants {
                match child {
                    Node::Object {
                        left_value,
                        right_value,
                        kind,
                        value_kind,
                    } => dir.push_record(Record::new(
                        kind,
                        value_kind,
                        left_value,
                        right_value,
                        // The wire form carries no reason; see `record_to_node`.
                        String::new(),
                    )),
                    dir_node @ Node::Dir { .. } => {
                        dir.push_directory(node_to_directory(dir_node)?)
                    }
                }
            }
            Ok(dir)
        }
        Node::Object { .. } => Err(TreeError::RootNotDirectory),
    }
}

/// Serialize `root` to compact JSON.
pub fn to_json(root: &Directory) -> TreeResult<String> {
    serde_json::to_string(&directory_to_node(root))
        .map_err(|e| TreeError::Serialization(e.to_string()))
}

/// Serialize `root` to indented JSON.
///
/// Purely a formatting difference from [`to_json`]: the node stream and all
/// values are identical, only whitespace changes. Formatting is idempotent.
pub fn to_json_pretty(root: &Directory) -> TreeResult<String> {
    serde_json::to_string_pretty(&directory_to_node(root))
        .map_err(|e| TreeError::Serialization(e.to_string()))
}

/// Stream `root` as compact JSON into `writer`.
///
/// I/O faults surface as [`TreeError::Write`]; output is never silently
/// truncated.
pub fn write_json<W: io::Write>(root: &Directory, writer: W) -> TreeResult<()> {
    serde_json::to_writer(writer, &directory_to_node(root)).map_err(|e| {
        if e.is_io() {
            TreeError::Write(io::Error::from(e))
        } else {
            TreeError::Serialization(e.to_string())
        }
    })
}

/// Parse a serialized diff tree back into its root directory.
pub fn from_json(text: &str) -> TreeResult<Directory> {
    let node: Node =
        serde_json::from_str(text).map_err(|e| TreeError::Parse(e.to_string()))?;
    node_to_directory(node)
}
