// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! This module contains the traits that need to be implemented by the types
//! that represent a node and an edge.

use crate::category::NodeGroup;

/**
This trait needs to be implemented by the type that represents a node.

The graph layer only needs a stable identifier and a group for styling and
info-panel decisions; everything else stays on the concrete type.  The
[`NodeRecord`][crate::NodeRecord] type decoded from the backend document
implements it like this:

```ignore
impl microgrid_topology_viz::Node for NodeRecord {
    fn node_id(&self) -> u64 {
        self.id
    }

    fn group(&self) -> microgrid_topology_viz::NodeGroup {
        self.group
    }
}
```
*/
pub trait Node {
    /// Returns the id of the node.
    fn node_id(&self) -> u64;
    /// Returns the group of the node.
    fn group(&self) -> NodeGroup;
}

/**
This trait needs to be implemented by the type that represents an electrical
connection.

The `source`/`destination` pair is the connection's *recorded* orientation;
the rendered direction can differ hour by hour and is tracked on the view
state, not here.
*/
pub trait Edge {
    /// Returns the node id at the recorded source end of the connection.
    fn source(&self) -> u64;
    /// Returns the node id at the recorded destination end of the connection.
    fn destination(&self) -> u64;
}
