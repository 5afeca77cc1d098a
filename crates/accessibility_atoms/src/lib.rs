//! Atoms shared by the accessibility layer.
//!
//! The whole list is interned with one bulk registration at start-up, and the
//! resulting handles are handed around in an [`AccessibilityAtoms`] value.

use a11y_atom::{AtomId, AtomTable, StaticAtom, static_atoms};

static_atoms! {
    /// Handles of every accessibility atom, bound by [`AccessibilityAtoms::initialize`].
    pub struct AccessibilityAtoms;
    const ACCESSIBILITY_ATOMS;

    GENERAL: {
        empty: "",
        button: "button",
        checkbox: "checkbox",
        col: "col",
        false_: "false",
        image: "image",
        menu: "menu",
        menu_button: "menu-button",
        menugenerated: "menugenerated",
        multiple: "multiple",
        open: "open",
        password: "password",
        radio: "radio",
        reset: "reset",
        row: "row",
        submit: "submit",
        true_: "true",
        undefined: "undefined",
        header_content_language: "content-language",
    },

    FRAME_TYPES: {
        block_frame: "BlockFrame",
        br_frame: "BRFrame",
        deck_frame: "DeckFrame",
        inline_block_frame: "InlineBlockFrame",
        inline_frame: "InlineFrame",
        object_frame: "ObjectFrame",
        scroll_frame: "ScrollFrame",
        text_frame: "TextFrame",
        table_cell_frame: "TableCellFrame",
        table_outer_frame: "TableOuterFrame",
    },

    TAGS: {
        a: "a",
        abbr: "abbr",
        acronym: "acronym",
        area: "area",
        autocomplete: "autocomplete",
        blockquote: "blockquote",
        br: "br",
        body: "body",
        caption: "caption",
        choices: "choices",
        dd: "dd",
        description: "description",
        div: "div",
        dl: "dl",
        dt: "dt",
        form: "form",
        frame: "frame",
        frameset: "frameset",
        h1: "h1",
        h2: "h2",
        h3: "h3",
        h4: "h4",
        h5: "h5",
        h6: "h6",
        html: "html",
        iframe: "iframe",
        img: "img",
        input: "input",
        label: "label",
        legend: "legend",
        li: "li",
        link: "link",
        listcell: "listcell",
        listcol: "listcol",
        listcols: "listcols",
        listhead: "listhead",
        listheader: "listheader",
        map: "map",
        math: "math",
        menupopup: "menupopup",
        object: "object",
        ol: "ol",
        optgroup: "optgroup",
        option: "option",
        output: "output",
        p: "p",
        pre: "pre",
        q: "q",
        select: "select",
        span: "span",
        sub: "sub",
        sup: "sup",
        table: "table",
        tabpanels: "tabpanels",
        tbody: "tbody",
        td: "td",
        textarea: "textarea",
        textbox: "textbox",
        tfoot: "tfoot",
        th: "th",
        thead: "thead",
        toolbaritem: "toolbaritem",
        toolbarseparator: "toolbarseparator",
        tr: "tr",
        ul: "ul",
    },

    ATTRIBUTES: {
        accesskey: "accesskey",
        alt: "alt",
        anonid: "anonid",
        class_: "class",
        contenteditable: "contenteditable",
        control: "control",
        cycles: "cycles",
        curpos: "curpos",
        data: "data",
        disabled: "disabled",
        draggable: "draggable",
        droppable: "droppable",
        editable: "editable",
        for_: "for",
        headers: "headers",
        hidden: "hidden",
        href: "href",
        id: "id",
        increment: "increment",
        lang: "lang",
        linkedpanel: "linkedpanel",
        longdesc: "longdesc",
        max: "max",
        maxpos: "maxpos",
        minpos: "minpos",
        multiline: "multiline",
        name: "name",
        onclick: "onclick",
        readonly: "readonly",
        role: "role",
        scope: "scope",
        selected: "selected",
        seltype: "seltype",
        src: "src",
        summary: "summary",
        tabindex: "tabindex",
        title: "title",
        toolbarname: "toolbarname",
        tooltiptext: "tooltiptext",
        type_: "type",
        value: "value",
    },

    ARIA_ATTRIBUTES: {
        aria_activedescendant: "aria-activedescendant",
        aria_atomic: "aria-atomic",
        aria_autocomplete: "aria-autocomplete",
        aria_busy: "aria-busy",
        aria_checked: "aria-checked",
        aria_controls: "aria-controls",
        aria_describedby: "aria-describedby",
        aria_disabled: "aria-disabled",
        aria_dropeffect: "aria-dropeffect",
        aria_expanded: "aria-expanded",
        aria_flowto: "aria-flowto",
        aria_grabbed: "aria-grabbed",
        aria_haspopup: "aria-haspopup",
        aria_hidden: "aria-hidden",
        aria_invalid: "aria-invalid",
        aria_label: "aria-label",
        aria_labelledby: "aria-labelledby",
        aria_level: "aria-level",
        aria_live: "aria-live",
        aria_multiline: "aria-multiline",
        aria_multiselectable: "aria-multiselectable",
        aria_orientation: "aria-orientation",
        aria_owns: "aria-owns",
        aria_posinset: "aria-posinset",
        aria_pressed: "aria-pressed",
        aria_readonly: "aria-readonly",
        aria_relevant: "aria-relevant",
        aria_required: "aria-required",
        aria_selected: "aria-selected",
        aria_setsize: "aria-setsize",
        aria_sort: "aria-sort",
        aria_valuemax: "aria-valuemax",
        aria_valuemin: "aria-valuemin",
        aria_valuenow: "aria-valuenow",
        aria_valuetext: "aria-valuetext",
    },

    OBJECT_ATTRIBUTES: {
        checkable: "checkable",
        container_atomic: "container-atomic",
        container_busy: "container-busy",
        container_live: "container-live",
        container_live_role: "container-live-role",
        container_relevant: "container-relevant",
        display: "display",
        explicit_name: "explicit-name",
        level: "level",
        line_number: "line-number",
        live: "live",
        posinset: "posinset",
        setsize: "setsize",
        table_cell_index: "table-cell-index",
        tag: "tag",
        text_align: "text-align",
        text_indent: "text-indent",
        xml_roles: "xml-roles",
    },
}

impl AccessibilityAtoms {
    pub fn is_boolean_value(&self, atom: AtomId) -> bool {
        atom == self.true_ || atom == self.false_
    }

    pub fn is_heading(&self, atom: AtomId) -> bool {
        [self.h1, self.h2, self.h3, self.h4, self.h5, self.h6].contains(&atom)
    }
}

fn in_group(group: &[StaticAtom], atom: AtomId) -> bool {
    group.iter().any(|a| a.id() == atom)
}

pub fn is_tag(atom: AtomId) -> bool {
    in_group(TAGS, atom)
}

pub fn is_aria_attribute(atom: AtomId) -> bool {
    in_group(ARIA_ATTRIBUTES, atom)
}

pub fn is_object_attribute(atom: AtomId) -> bool {
    in_group(OBJECT_ATTRIBUTES, atom)
}

/// Create a table holding every accessibility atom.
#[tracing::instrument(level = "debug")]
pub fn init_accessibility_atoms() -> (AtomTable<'static>, AccessibilityAtoms) {
    let mut table = AtomTable::new(AccessibilityAtoms::LEN * 2);
    let atoms = AccessibilityAtoms::initialize(&mut table);
    (table, atoms)
}
