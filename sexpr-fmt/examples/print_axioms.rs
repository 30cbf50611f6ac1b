use sexpr_fmt::{format_sexpression, markdown_section, LayoutConfig};

const AXIOMS: &[&str] = &[
    "((e1 is (Receiving FED_ID))) ∧ ((e2 is (Sending ACK))) ∧ ((Federate(e1) = Federate(e2))) ⇒ e1 ≺ e2",
    "((e1 is (Receiving TIMESTAMP))) ∧ ((e2 is (Receiving LTC))) ∨ ((e2 is (Receiving PORT_ABS))) ∨ ((e2 is (Receiving TAGGED_MSG))) ∨ ((e2 is (Sending TAG))) ∨ ((e2 is (Sending PTAG))) ∨ ((e2 is (Sending PORT_ABS))) ∨ ((e2 is (Sending TAGGED_MSG))) ∨ ((e2 is (Sending STOP_GRN))) ∨ ((e2 is (Sending STOP_REQ))) ∨ ((e2 is (Receiving STOP_REQ))) ∨ ((e2 is (Receiving STOP_REQ_REP))) ⇒ e1 ≺ e2",
    "(FedwiseFIRST (((e1 is (Receiving LTC))) ∧ ((Federate of e1 is upstream of federate of e2 via a zero-delay connection)) ∧ ((Tag e1) ≥ (Tag e2))) ∨ ((((e1 is (Sending TAG))) ∨ ((e1 is (Receiving NET))) ∨ ((e1 is (Sending STOP_GRN)))) ∧ ((Federate of e1 is upstream of federate of e2 via a zero-delay connection)) ∧ ((Tag e1) ≥ (Tag e2)))) ∧ ((e2 is (Sending TAG))) ∧ ((Tag e2) ≠ 0) ⇒ e1 ≺ e2",
    "(((FIRST ((((e1 is (Sending PTAG))) ∧ ((Federate of e1 is upstream of federate of e2 via a zero-delay connection)) ∧ ((Tag e1) = (Tag e2))) ∨ ((((e1 is (Receiving NET))) ∨ ((e1 is (Sending STOP_GRN)))) ∧ ((Federate(e1) = Federate(e2)) ∨ ((Federate of e1 is directly upstream of federate of e2))) ∧ ((Tag e1) = (Tag e2)))))) ∧ (((e2 is (Sending PTAG))) ∧ ((Tag e2) ≠ 0))) ⇒ (e1 ≺ e2)",
];

pub fn main() {
    let config = LayoutConfig::default();
    for (i, axiom) in AXIOMS.iter().enumerate() {
        print!(
            "{}",
            markdown_section(i + 1, &format_sexpression(axiom, &config))
        );
    }
}
