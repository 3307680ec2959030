//! Fixed, schema-independent preamble modules.
//!
//! Written once per run, unconditionally, before any entity output.

/// File name of the base capability module.
pub const S_OBJECT_FILE: &str = "s-object.ts";

/// File name of the scalar alias module.
pub const SCALARS_FILE: &str = "scalars.ts";

/// Base capability: the identity field and the discriminator-bearing
/// attributes marker every generated interface extends.
pub const S_OBJECT_TS: &str = r#"// Generated by sobtype. Do not edit.

import { Attributes, SalesforceId } from "./scalars";

export interface SObject<Name extends string> {
  Id: SalesforceId;
  attributes: Attributes<Name>;
}
"#;

/// Scalar aliases and generics referenced throughout generated modules.
pub const SCALARS_TS: &str = r#"// Generated by sobtype. Do not edit.

export type SalesforceId = string;

export type PhoneString = string;

export type DateString = string | null;

export interface Attributes<Name extends string> {
  type: Name;
  url: string;
}

export interface ChildRecords<Name extends string, T> {
  totalSize: number;
  done: boolean;
  records: (T & { attributes: Attributes<Name> })[];
}
"#;

/// Import lines every entity-bearing module starts with.
pub const IMPORT_LINES: &str = r#"// Generated by sobtype. Do not edit.

import { SObject } from "./s-object";
import { ChildRecords, DateString, PhoneString, SalesforceId } from "./scalars";
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_declares_every_alias() {
        for alias in ["SalesforceId", "PhoneString", "DateString", "Attributes", "ChildRecords"] {
            assert!(SCALARS_TS.contains(alias), "missing {alias}");
        }
        assert!(S_OBJECT_TS.contains("export interface SObject<Name extends string>"));
        assert!(S_OBJECT_TS.contains("Id: SalesforceId;"));
    }

    #[test]
    fn test_import_lines_cover_both_preamble_modules() {
        assert!(IMPORT_LINES.contains("from \"./s-object\""));
        assert!(IMPORT_LINES.contains("from \"./scalars\""));
    }
}
