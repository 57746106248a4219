//! A minimal model of a generated TypeScript data module
//!
//! Every exported file has the same shape: a comment header, import lines,
//! then a sequence of top-level items separated by blank lines. Items are
//! built from typed descriptions (interfaces, constants, lookup maps,
//! accessor functions) and rendered in order by [`TsModule::render`].

/// A field of an exported interface
#[derive(Debug, Clone)]
pub struct TsField {
    pub name: &'static str,
    pub ty: &'static str,
    pub optional: bool,
}

impl TsField {
    pub const fn required(name: &'static str, ty: &'static str) -> Self {
        Self {
            name,
            ty,
            optional: false,
        }
    }

    pub const fn optional(name: &'static str, ty: &'static str) -> Self {
        Self {
            name,
            ty,
            optional: true,
        }
    }
}

/// One top-level item of a module
#[derive(Debug, Clone)]
pub enum TsItem {
    /// `export interface Name { ... }`
    Interface {
        name: &'static str,
        fields: &'static [TsField],
    },
    /// `export const name: Type = <literal>;`
    Const {
        name: String,
        ty: String,
        literal: String,
    },
    /// `export const name: Record<K, V> = { key: value, ... };`
    RecordMap {
        name: &'static str,
        key_ty: &'static str,
        value_ty: &'static str,
        entries: Vec<(String, String)>,
    },
    /// `collection.find(...)` accessor returning one record or undefined
    FindBy(Accessor),
    /// `collection.filter(...)` accessor returning a list
    FilterBy(Accessor),
    /// Comment lines
    Comment(Vec<String>),
    /// Text emitted as-is
    Raw(String),
}

/// Description of a generated lookup function
#[derive(Debug, Clone)]
pub struct Accessor {
    pub fn_name: &'static str,
    pub param: &'static str,
    pub param_ty: &'static str,
    pub record_ty: &'static str,
    pub collection: &'static str,
    pub var: &'static str,
    pub field: &'static str,
}

/// A generated module
#[derive(Debug, Clone, Default)]
pub struct TsModule {
    header: Vec<String>,
    imports: Vec<String>,
    items: Vec<TsItem>,
}

impl TsModule {
    /// Start a module with its header comment lines (without `// `)
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add `import { a, b } from 'source';`
    pub fn import<I, S>(mut self, names: I, source: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        self.imports
            .push(format!("import {{ {} }} from '{}';", names.join(", "), source));
        self
    }

    pub fn item(mut self, item: TsItem) -> Self {
        self.items.push(item);
        self
    }

    /// Render the module text, ending with a newline
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if !self.header.is_empty() {
            sections.push(
                self.header
                    .iter()
                    .map(|line| format!("// {}", line))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        if !self.imports.is_empty() {
            sections.push(self.imports.join("\n"));
        }
        sections.extend(self.items.iter().map(render_item));

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}

fn render_item(item: &TsItem) -> String {
    match item {
        TsItem::Interface { name, fields } => {
            let mut out = format!("export interface {} {{\n", name);
            for field in fields.iter() {
                let mark = if field.optional { "?" } else { "" };
                out.push_str(&format!("  {}{}: {};\n", field.name, mark, field.ty));
            }
            out.push('}');
            out
        }
        TsItem::Const { name, ty, literal } => {
            format!("export const {}: {} = {};", name, ty, literal)
        }
        TsItem::RecordMap {
            name,
            key_ty,
            value_ty,
            entries,
        } => {
            let mut out = format!(
                "export const {}: Record<{}, {}> = {{\n",
                name, key_ty, value_ty
            );
            for (key, value) in entries {
                out.push_str(&format!("  {}: {},\n", key, value));
            }
            out.push_str("};");
            out
        }
        TsItem::FindBy(a) => format!(
            "export const {} = ({}: {}): {} | undefined => {{\n  return {}.find({} => {}.{} === {});\n}};",
            a.fn_name, a.param, a.param_ty, a.record_ty, a.collection, a.var, a.var, a.field, a.param
        ),
        TsItem::FilterBy(a) => format!(
            "export const {} = ({}: {}): {}[] => {{\n  return {}.filter({} => {}.{} === {});\n}};",
            a.fn_name, a.param, a.param_ty, a.record_ty, a.collection, a.var, a.var, a.field, a.param
        ),
        TsItem::Comment(lines) => lines
            .iter()
            .map(|line| format!("// {}", line))
            .collect::<Vec<_>>()
            .join("\n"),
        TsItem::Raw(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIELDS: &[TsField] = &[
        TsField::required("slug", "string"),
        TsField::optional("note", "string"),
    ];

    #[test]
    fn test_render_layout() {
        let module = TsModule::new(["Things Data", "Auto-generated"])
            .import(["Thing"], "./types")
            .import(["Zap", "Sun"], "lucide-react")
            .item(TsItem::Interface {
                name: "Thing",
                fields: FIELDS,
            })
            .item(TsItem::Const {
                name: "things".into(),
                ty: "Thing[]".into(),
                literal: "[]".into(),
            });

        assert_eq!(
            module.render(),
            "// Things Data\n// Auto-generated\n\n\
             import { Thing } from './types';\n\
             import { Zap, Sun } from 'lucide-react';\n\n\
             export interface Thing {\n  slug: string;\n  note?: string;\n}\n\n\
             export const things: Thing[] = [];\n"
        );
    }

    #[test]
    fn test_accessors_and_maps() {
        let accessor = Accessor {
            fn_name: "getThingBySlug",
            param: "slug",
            param_ty: "string",
            record_ty: "Thing",
            collection: "things",
            var: "t",
            field: "slug",
        };
        let module = TsModule::default()
            .item(TsItem::FindBy(accessor.clone()))
            .item(TsItem::RecordMap {
                name: "thingColors",
                key_ty: "string",
                value_ty: "string",
                entries: vec![("a".into(), "'red'".into())],
            });
        let text = module.render();
        assert!(text.starts_with(
            "export const getThingBySlug = (slug: string): Thing | undefined => {\n  return things.find(t => t.slug === slug);\n};\n\n"
        ));
        assert!(text.ends_with("export const thingColors: Record<string, string> = {\n  a: 'red',\n};\n"));
    }
}
