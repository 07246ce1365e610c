//! C++ header rendering.
//!
//! Pure text transforms over [`EnumMapping`]s. No I/O happens here, so the
//! token set, values, and ordering can all be asserted against literal
//! expected output.

use crate::mapping::EnumMapping;

/// File name of the generated header, echoed in its identity comment.
pub const HEADER_FILE_NAME: &str = "EnumDataBindings.h";

/// Declared name of the monster enum.
pub const MONSTER_TYPE_NAME: &str = "MonsterType";

/// Declared name of the treasure enum.
pub const ITEM_TYPE_NAME: &str = "TreasureType";

/// Namespace wrapping everything in the generated header.
const NAMESPACE: &str = "LootSimulator";

/// Trailing member reporting how many real members an enum carries.
const COUNT_MEMBER: &str = "NUM_TYPES";

/// Fill width of the `//----`/`//====` rules framing the header.
const RULE_WIDTH: usize = 79;

fn rule(fill: char) -> String {
    format!("//{}\n", String::from(fill).repeat(RULE_WIDTH))
}

fn indent(levels: usize) -> String {
    "    ".repeat(levels)
}

/// Identity comment naming the generated file.
fn file_comment(file_name: &str) -> String {
    format!("{}//\n// {}\n//\n", rule('-'), file_name)
}

/// Render an `enum struct` declaration over a mapping.
///
/// Member 0 is the sentinel pinned to -1, member 1 restarts explicit
/// numbering at 0, later members count up implicitly, and the trailing
/// count member lets consumers size arrays over the real members.
pub fn enum_decl(mapping: &EnumMapping, type_name: &str) -> String {
    let mut decl = format!("enum struct {type_name} : int32_t\n{{\n");
    for (i, (_, token)) in mapping.entries().iter().enumerate() {
        decl.push_str(&indent(1));
        decl.push_str(token);
        match i {
            0 => decl.push_str(" = -1"),
            1 => decl.push_str(" = 0"),
            _ => {}
        }
        decl.push_str(",\n");
    }
    decl.push_str(&indent(1));
    decl.push_str(COUNT_MEMBER);
    decl.push('\n');
    decl.push_str("};\n");
    decl
}

/// Render the `NLOHMANN_JSON_SERIALIZE_ENUM` table binding each member to
/// its raw id, in mapping order. The count member has no raw id and is
/// left out.
pub fn binding_table(mapping: &EnumMapping, type_name: &str) -> String {
    let mut table = format!("NLOHMANN_JSON_SERIALIZE_ENUM({type_name},\n{}{{\n", indent(1));
    for (raw, token) in mapping.entries() {
        table.push_str(&format!(
            "{}{{ {type_name}::{token}, \"{raw}\" }},\n",
            indent(2)
        ));
    }
    table.push_str(&indent(1));
    table.push_str("});\n");
    table
}

/// Assemble the complete header text in its fixed section order: identity
/// comment, include guard, generated-file warning, json include, then both
/// enums and both binding tables inside the namespace.
pub fn header(monsters: &EnumMapping, treasures: &EnumMapping) -> String {
    let mut out = String::new();
    out.push_str(&file_comment(HEADER_FILE_NAME));
    out.push('\n');
    out.push_str("#pragma once\n\n");
    out.push_str("// This is a generated file! Any changes here will be lost!!!\n\n");
    out.push_str("#include <nlohmann/json/json.hpp>\n\n");
    out.push_str(&format!("namespace {NAMESPACE} {{\n\n"));
    out.push_str(&rule('='));
    out.push('\n');
    out.push_str(&enum_decl(monsters, MONSTER_TYPE_NAME));
    out.push('\n');
    out.push_str(&enum_decl(treasures, ITEM_TYPE_NAME));
    out.push('\n');
    out.push_str(&binding_table(monsters, MONSTER_TYPE_NAME));
    out.push('\n');
    out.push_str(&binding_table(treasures, ITEM_TYPE_NAME));
    out.push('\n');
    out.push_str(&rule('='));
    out.push('\n');
    out.push_str(&format!("}} // namespace {NAMESPACE}\n"));
    out
}
