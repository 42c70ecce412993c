//! Splitting slack into per-child border growth.
//!
//! Both distributions are exact: the shares always add up to the slack.

use boxgroup_core::Anchor;

/// Extra border a child receives before and after itself on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Share {
    pub leading: u32,
    pub trailing: u32,
}

impl Share {
    pub fn new(leading: u32, trailing: u32) -> Self {
        Self { leading, trailing }
    }

    pub fn total(&self) -> u32 {
        self.leading + self.trailing
    }
}

/// Spread `slack` over `count` children along the group axis.
///
/// Every child grows by `slack / (2 * count)` on both sides. The remainder
/// goes out in insertion order, one unit on each side per child; when a
/// single unit is left it lands on the trailing side of the next child.
pub fn distribute_symmetric(slack: u32, count: usize) -> Vec<Share> {
    if count == 0 {
        return Vec::new();
    }

    let pairs = 2 * count as u64;
    let unit = (u64::from(slack) / pairs) as u32;
    let mut remainder = u64::from(slack) - pairs * u64::from(unit);

    let mut shares = vec![Share::new(unit, unit); count];
    for share in &mut shares {
        match remainder {
            0 => break,
            1 => {
                share.trailing += 1;
                remainder = 0;
            }
            _ => {
                share.leading += 1;
                share.trailing += 1;
                remainder -= 2;
            }
        }
    }
    shares
}

/// Give one child's cross-axis slack to the side its alignment leaves open.
pub fn distribute_aligned(slack: u32, anchor: Anchor) -> Share {
    match anchor {
        Anchor::Start => Share::new(0, slack),
        Anchor::End => Share::new(slack, 0),
        Anchor::Center => {
            let leading = slack / 2;
            Share::new(leading, slack - leading)
        }
    }
}
