pub(crate) mod classes;
pub(crate) mod columns;
pub(crate) mod css;
pub(crate) mod grid;
pub(crate) mod normalize;
pub(crate) mod rows;
