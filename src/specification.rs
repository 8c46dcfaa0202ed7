//! Composable boolean specifications over a domain type.
//!
//! A [`Specification`] is an immutable tree of predicates joined by AND, OR and
//! NOT, rooted in the identity [`Specification::all`] which every value
//! satisfies. Composing with `all()` is simplified away when the tree is built:
//!
//! - `spec.and(all())` and `all().and(spec)` give back `spec`
//! - `spec.or(all())` and `all().or(spec)` give back `all()`
//!
//! Chains of the same connective are kept flat: `a & b & c` is one AND node with
//! three operands, so a specification folded from thousands of filters is still
//! a shallow tree.
//!
//! On first evaluation the tree is compiled into a single closure, which the
//! specification keeps for the rest of its life. Sub-specifications reuse their own
//! compiled closures, so a shared building block is compiled once no matter how
//! many trees contain it.
//!
//! # Example
//!
//! ```rust
//! use wrapture::Specification;
//!
//! #[derive(Debug)]
//! struct Order {
//!     total: u32,
//!     express: bool,
//! }
//!
//! let large = Specification::leaf(|o: &Order| o.total > 100);
//! let express = Specification::leaf(|o: &Order| o.express);
//! let priority = large.clone() & express.clone();
//! let routine = !priority.clone();
//!
//! let order = Order { total: 150, express: true };
//! assert!(priority.is_satisfied_by(&order));
//! assert!(!routine.is_satisfied_by(&order));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::{Arc, OnceLock};

use crate::predicate::Predicate;

type Compiled<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

enum Node<T: ?Sized> {
    All,
    Leaf(Arc<dyn Predicate<T>>),
    And(Vec<Specification<T>>),
    Or(Vec<Specification<T>>),
    Not(Specification<T>),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Junction {
    And,
    Or,
}

impl<T: ?Sized> Node<T> {
    fn operands(&self, kind: Junction) -> Option<&[Specification<T>]> {
        match (self, kind) {
            (Node::And(children), Junction::And) | (Node::Or(children), Junction::Or) => {
                Some(children.as_slice())
            }
            _ => None,
        }
    }
}

struct Inner<T: ?Sized> {
    node: Node<T>,
    compiled: OnceLock<Compiled<T>>,
}

/// A composable, lazily compiled predicate over `T`.
///
/// Cloning is cheap and shares both the tree and its compiled closure.
pub struct Specification<T: ?Sized> {
    inner: Arc<Inner<T>>,
}

impl<T: ?Sized + 'static> Specification<T> {
    fn from_node(node: Node<T>) -> Self {
        Specification {
            inner: Arc::new(Inner {
                node,
                compiled: OnceLock::new(),
            }),
        }
    }

    /// The identity specification, satisfied by every value.
    pub fn all() -> Self {
        Specification::from_node(Node::All)
    }

    /// A specification backed by a single predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::predicate::between;
    /// use wrapture::Specification;
    ///
    /// let working_age = Specification::leaf(between(18u8, 67));
    /// assert!(working_age.is_satisfied_by(&30));
    /// assert!(!working_age.is_satisfied_by(&70));
    /// ```
    pub fn leaf<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Specification::from_node(Node::Leaf(Arc::new(predicate)))
    }

    /// Returns `true` for the identity specification.
    pub fn is_all(&self) -> bool {
        matches!(self.inner.node, Node::All)
    }

    /// Satisfied when both `self` and `other` are.
    ///
    /// The identity is absorbed: if either side is [`Specification::all`], the
    /// other side is returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Specification;
    ///
    /// let above_ten = Specification::<i32>::all().and_where(|x: &i32| *x > 10);
    /// let below_twenty = Specification::<i32>::all().and_where(|x: &i32| *x < 20);
    /// let teen_range = above_ten.and(below_twenty);
    ///
    /// assert!(teen_range.is_satisfied_by(&15));
    /// assert!(!teen_range.is_satisfied_by(&25));
    /// assert!(!teen_range.is_satisfied_by(&5));
    /// ```
    pub fn and(self, other: Specification<T>) -> Self {
        if self.is_all() {
            return other;
        }
        if other.is_all() {
            return self;
        }
        Specification::join(Junction::And, self, other)
    }

    /// Shorthand for `self.and(Specification::leaf(predicate))`.
    pub fn and_where<P>(self, predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        self.and(Specification::leaf(predicate))
    }

    /// Satisfied when either `self` or `other` is.
    ///
    /// If either side is [`Specification::all`], the result is `all()`.
    pub fn or(self, other: Specification<T>) -> Self {
        if self.is_all() {
            return self;
        }
        if other.is_all() {
            return other;
        }
        Specification::join(Junction::Or, self, other)
    }

    /// Shorthand for `self.or(Specification::leaf(predicate))`.
    pub fn or_where<P>(self, predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        self.or(Specification::leaf(predicate))
    }

    fn join(kind: Junction, left: Self, right: Self) -> Self {
        let mut children = left.into_operands(kind);
        children.extend(right.into_operands(kind));
        Specification::from_node(match kind {
            Junction::And => Node::And(children),
            Junction::Or => Node::Or(children),
        })
    }

    // Splice a same-kind node into its parent. An unshared node gives up its
    // children without copying; a shared one is left intact for its other owners.
    fn into_operands(self, kind: Junction) -> Vec<Self> {
        if self.inner.node.operands(kind).is_none() {
            return vec![self];
        }
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => match inner.node {
                Node::And(children) | Node::Or(children) => children,
                node => vec![Specification::from_node(node)],
            },
            Err(shared) => {
                let children = shared.node.operands(kind).map(<[Self]>::to_vec);
                children.unwrap_or_else(|| vec![Specification { inner: shared }])
            }
        }
    }

    /// Satisfied exactly when `self` is not.
    ///
    /// Always builds a new node, including for `all()`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Specification::from_node(Node::Not(self))
    }

    /// Evaluate the specification against `candidate`.
    ///
    /// The first call compiles the tree; later calls reuse the compiled closure.
    pub fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.compiled())(candidate)
    }

    /// Keep only the items that satisfy the specification.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Specification;
    ///
    /// let even = Specification::leaf(|n: &i32| n % 2 == 0);
    /// let evens: Vec<i32> = even.filter(1..=6).collect();
    /// assert_eq!(evens, vec![2, 4, 6]);
    /// ```
    pub fn filter<I>(&self, items: I) -> impl Iterator<Item = I::Item>
    where
        T: Sized,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let predicate = self.compiled();
        items
            .into_iter()
            .filter(move |item| predicate(<I::Item as Borrow<T>>::borrow(item)))
    }

    /// Returns `true` once the tree has been compiled.
    pub fn is_compiled(&self) -> bool {
        self.inner.compiled.get().is_some()
    }

    fn compiled(&self) -> Compiled<T> {
        Arc::clone(self.inner.compiled.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(nodes = self.node_count(), "compiling specification");

            self.compile()
        }))
    }

    fn compile(&self) -> Compiled<T> {
        match &self.inner.node {
            Node::All => Arc::new(|_: &T| true),
            Node::Leaf(predicate) => {
                let predicate = Arc::clone(predicate);
                Arc::new(move |candidate: &T| predicate.check(candidate))
            }
            Node::And(children) => {
                let children: Vec<_> = children.iter().map(Self::compiled).collect();
                Arc::new(move |candidate: &T| children.iter().all(|child| child(candidate)))
            }
            Node::Or(children) => {
                let children: Vec<_> = children.iter().map(Self::compiled).collect();
                Arc::new(move |candidate: &T| children.iter().any(|child| child(candidate)))
            }
            Node::Not(inner) => {
                let inner = inner.compiled();
                Arc::new(move |candidate: &T| !inner(candidate))
            }
        }
    }

    #[cfg(feature = "tracing")]
    fn node_count(&self) -> usize {
        match &self.inner.node {
            Node::All | Node::Leaf(_) => 1,
            Node::And(children) | Node::Or(children) => {
                1 + children.iter().map(Self::node_count).sum::<usize>()
            }
            Node::Not(inner) => 1 + inner.node_count(),
        }
    }
}

impl<T: ?Sized> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Specification {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized + 'static> Default for Specification<T> {
    fn default() -> Self {
        Specification::all()
    }
}

impl<T: ?Sized> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.node {
            Node::All => f.write_str("All"),
            Node::Leaf(_) => f.write_str("Leaf"),
            Node::And(children) => fmt_operands(f, "And", children),
            Node::Or(children) => fmt_operands(f, "Or", children),
            Node::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
        }
    }
}

fn fmt_operands<T: ?Sized>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    children: &[Specification<T>],
) -> fmt::Result {
    let mut tuple = f.debug_tuple(name);
    for child in children {
        tuple.field(child);
    }
    tuple.finish()
}

impl<T: ?Sized + 'static> Predicate<T> for Specification<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.is_satisfied_by(value)
    }
}

impl<T: ?Sized + 'static> BitAnd for Specification<T> {
    type Output = Specification<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<T: ?Sized + 'static> BitOr for Specification<T> {
    type Output = Specification<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: ?Sized + 'static> Not for Specification<T> {
    type Output = Specification<T>;

    fn not(self) -> Self::Output {
        Specification::not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn gt(n: i32) -> Specification<i32> {
        Specification::leaf(move |x: &i32| *x > n)
    }

    #[test]
    fn test_all_is_satisfied_by_everything() {
        let all = Specification::<i32>::all();
        assert!(all.is_satisfied_by(&i32::MIN));
        assert!(all.is_satisfied_by(&0));
    }

    #[test]
    fn test_and_absorbs_identity() {
        let spec = gt(1);
        assert_eq!(format!("{:?}", spec.clone().and(Specification::all())), "Leaf");
        assert_eq!(format!("{:?}", Specification::all().and(spec)), "Leaf");
    }

    #[test]
    fn test_or_with_identity_is_identity() {
        assert!(gt(1).or(Specification::all()).is_all());
        assert!(Specification::all().or(gt(1)).is_all());
    }

    #[test]
    fn test_not_always_builds_a_node() {
        let never = Specification::<i32>::all().not();
        assert_eq!(format!("{:?}", never), "Not(All)");
        assert!(!never.is_satisfied_by(&1));
    }

    #[test]
    fn test_tree_shape() {
        let spec = (gt(0) & gt(1)) | !gt(2);
        assert_eq!(format!("{:?}", spec), "Or(And(Leaf, Leaf), Not(Leaf))");
    }

    #[test]
    fn test_same_kind_chains_are_flat() {
        let spec = gt(0) & gt(1) & gt(2) & (gt(3) & gt(4));
        assert_eq!(format!("{:?}", spec), "And(Leaf, Leaf, Leaf, Leaf, Leaf)");

        let spec = gt(0) | gt(1) | (gt(2) & gt(3)) | gt(4);
        assert_eq!(format!("{:?}", spec), "Or(Leaf, Leaf, And(Leaf, Leaf), Leaf)");
    }

    #[test]
    fn test_shared_operand_is_left_intact() {
        let base = gt(0) & gt(1);
        let extended = base.clone() & gt(2);

        assert_eq!(format!("{:?}", base), "And(Leaf, Leaf)");
        assert_eq!(format!("{:?}", extended), "And(Leaf, Leaf, Leaf)");
        assert!(base.is_satisfied_by(&2));
        assert!(!extended.is_satisfied_by(&2));
    }

    #[test]
    fn test_long_and_chain_evaluates() {
        let excluded = (0..10_000).fold(Specification::<i32>::all(), |spec, i| {
            spec.and_where(move |x: &i32| *x != -1 - i)
        });
        assert!(excluded.is_satisfied_by(&5));
        assert!(!excluded.is_satisfied_by(&-10_000));
        assert_eq!(format!("{:?}", excluded).matches("Leaf").count(), 10_000);
    }

    #[test]
    fn test_long_or_chain_evaluates() {
        let allowed = (0..10_000).fold(gt(i32::MAX - 1), |spec, i| {
            spec.or_where(move |x: &i32| *x == i)
        });
        assert!(allowed.is_satisfied_by(&9_999));
        assert!(!allowed.is_satisfied_by(&10_000));
    }

    #[test]
    fn test_compiled_closure_is_cached() {
        let spec = gt(0).and(gt(10));
        assert!(!spec.is_compiled());

        assert!(spec.is_satisfied_by(&11));
        let first = spec.compiled();
        assert!(!spec.is_satisfied_by(&5));
        let second = spec.compiled();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_and_short_circuits_right_side() {
        static RIGHT_CALLS: AtomicUsize = AtomicUsize::new(0);
        let right = Specification::leaf(|_: &i32| {
            RIGHT_CALLS.fetch_add(1, Ordering::SeqCst);
            true
        });
        let spec = gt(100).and(right);

        assert!(!spec.is_satisfied_by(&1));
        assert_eq!(RIGHT_CALLS.load(Ordering::SeqCst), 0);
        assert!(spec.is_satisfied_by(&101));
        assert_eq!(RIGHT_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_shared_subtree_compiles_once() {
        let shared = gt(0);
        let a = shared.clone().and(gt(5));
        let b = shared.clone().or(gt(-5));

        assert!(a.is_satisfied_by(&6));
        assert!(b.is_satisfied_by(&1));
        assert!(shared.is_compiled());
    }

    #[test]
    fn test_unsized_target() {
        let shouting = Specification::<str>::leaf(|s: &str| s.chars().all(char::is_uppercase));
        assert!(shouting.is_satisfied_by("LOUD"));
        assert!(!shouting.is_satisfied_by("quiet"));
    }

    #[test]
    fn test_specification_is_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Specification<String>>();
    }
}
