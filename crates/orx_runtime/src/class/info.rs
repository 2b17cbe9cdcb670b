bitflags::bitflags! {
    /// Per-class state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClassFlags: u32 {
        /// Built-in class; refuses `inherit`, `uninherit` and method changes.
        const REXX_DEFINED = 1 << 0;
        /// Class was imported from another package.
        const IMPORTED = 1 << 1;
        /// May be grafted into other classes with `inherit`.
        const MIXIN = 1 << 2;
        /// The class itself defines an `UNINIT` method.
        const HAS_UNINIT = 1 << 3;
        /// Instances are classes.
        const META_CLASS = 1 << 4;
        /// One of the classes created at bootstrap.
        const PRIMITIVE_CLASS = 1 << 5;
        /// Some ancestor defines an `UNINIT` method.
        const PARENT_HAS_UNINIT = 1 << 6;
    }
}

impl ClassFlags {
    #[inline]
    pub fn uninit_defined(self) -> bool {
        self.intersects(Self::HAS_UNINIT | Self::PARENT_HAS_UNINIT)
    }
}
