use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use rustc_hash::FxHashMap;

use crate::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy)]
struct Gate<'a> {
    op: Op,
    inputs: (&'a str, &'a str),
}

struct Device<'a> {
    wires: FxHashMap<&'a str, bool>,
    gates: FxHashMap<&'a str, Gate<'a>>,
}

impl<'a> Device<'a> {
    fn parse(input: &'a str) -> Result<Device<'a>> {
        let (initial, connections) = input
            .split_once("\n\n")
            .context("expected wire values and gates separated by a blank line")?;
        let mut wires = FxHashMap::default();
        for line in initial.lines() {
            let (wire, value) = line
                .split_once(": ")
                .with_context(|| format!("expected wire: value, got {line:?}"))?;
            wires.insert(wire, value == "1");
        }
        let mut gates = FxHashMap::default();
        for line in connections.lines().filter(|line| !line.is_empty()) {
            let (gate, output) = line
                .split_once(" -> ")
                .with_context(|| format!("expected gate -> wire, got {line:?}"))?;
            let (left, op, right) = gate
                .split_whitespace()
                .collect_tuple()
                .with_context(|| format!("expected two operands, got {gate:?}"))?;
            let op = match op {
                "AND" => Op::And,
                "OR" => Op::Or,
                "XOR" => Op::Xor,
                other => bail!("unknown gate {other:?}"),
            };
            ensure!(
                gates
                    .insert(
                        output,
                        Gate {
                            op,
                            inputs: (left, right),
                        },
                    )
                    .is_none(),
                "wire {output} driven by two gates"
            );
        }
        Ok(Device { wires, gates })
    }

    /// Settles every wire by evaluating gates in topological order.
    fn settle(&mut self) -> Result<()> {
        let mut graph = DiGraphMap::new();
        for (&output, gate) in &self.gates {
            graph.add_edge(gate.inputs.0, output, ());
            graph.add_edge(gate.inputs.1, output, ());
        }
        let order = toposort(&graph, None)
            .map_err(|cycle| anyhow::anyhow!("gate loop through {}", cycle.node_id()))?;
        for wire in order {
            let Some(gate) = self.gates.get(wire) else {
                continue;
            };
            let left = *self
                .wires
                .get(gate.inputs.0)
                .with_context(|| format!("wire {} has no value", gate.inputs.0))?;
            let right = *self
                .wires
                .get(gate.inputs.1)
                .with_context(|| format!("wire {} has no value", gate.inputs.1))?;
            let value = match gate.op {
                Op::And => left && right,
                Op::Or => left || right,
                Op::Xor => left != right,
            };
            self.wires.insert(wire, value);
        }
        Ok(())
    }

    /// Reads the number formed by all wires with the given prefix, lowest
    /// bit first.
    fn read_number(&self, prefix: char) -> i64 {
        self.wires
            .iter()
            .filter(|(wire, _)| wire.starts_with(prefix))
            .sorted()
            .rev()
            .fold(0, |acc, (_, &bit)| acc << 1 | bit as i64)
    }

    /// Flags gate outputs that sit in the wrong place for a ripple-carry
    /// adder. Four local rules cover every swap the device can express:
    /// a z wire (except the final carry) must come from XOR; an inner XOR
    /// must combine x/y inputs or drive a z wire; an AND (except the first
    /// half-adder's) must feed only OR; an XOR must never feed OR.
    fn misplaced_outputs(&self) -> Vec<&'a str> {
        let last_z = self
            .gates
            .keys()
            .filter(|wire| wire.starts_with('z'))
            .max()
            .copied();
        let feeds = |output: &str, op: Op| {
            self.gates
                .values()
                .any(|gate| gate.op == op && (gate.inputs.0 == output || gate.inputs.1 == output))
        };

        let mut wrong = Vec::new();
        for (&output, gate) in &self.gates {
            let (left, right) = gate.inputs;
            let takes_operands = left.starts_with(['x', 'y']) && right.starts_with(['x', 'y']);
            let first_bit = takes_operands && left.ends_with("00") && right.ends_with("00");
            let ok = match gate.op {
                _ if output.starts_with('z') && Some(output) != last_z => gate.op == Op::Xor,
                Op::Xor => takes_operands && !feeds(output, Op::Or),
                Op::And => first_bit || !feeds(output, Op::Xor),
                Op::Or => true,
            };
            if !ok {
                wrong.push(output);
            }
        }
        wrong.sort_unstable();
        wrong.dedup();
        wrong
    }
}

pub fn day24(input: &str) -> Result<(Answer, Answer)> {
    let mut device = Device::parse(input)?;
    let swapped = device.misplaced_outputs().into_iter().join(",");
    device.settle()?;
    Ok((device.read_number('z').into(), swapped.into()))
}
