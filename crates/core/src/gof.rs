//! Built-in catalog: the 23 Gang of Four design patterns.
//!
//! Intent and highlight texts are the classic course material the quiz was
//! built around; each pattern references its structure diagram as
//! `images/gof{id}.jpg`, with ids assigned 1..=23 in the order below.

use crate::model::{ImageRef, Pattern, PatternCatalog, PatternId};

/// (name, intent, highlights) per pattern, in catalog id order.
const ENTRIES: [(&str, &str, &str); 23] = [
    (
        "Abstract Factory",
        "Provide an interface for creating families of related or dependent\nobjects without specifying their concrete classes.",
        "- a level of indirection that provides creation services\n- supports a \"family\" of products\n- supprts many creation strategies: choice of derived class, reusing cached objects,\n  distributed creation, choice of platform or address space\n- the \"new\" statement considered harmful",
    ),
    (
        "Builder",
        "Separate the construction of a complex object from its representation\nso that the same construction process can create different representations.",
        "- one common input, many possible outputs\n- wrapper/delegate structure\n  - wrapper directs the algorithm of creation/composition\n  - each delegate encapsulates a target output",
    ),
    (
        "Factory Method",
        "Define an interface for creating an object, but let subclasses decide\nwhich class to instantiate.  Lets a class defer instantiation to subclasses.",
        "- indirect creation through inheritance\n- virtual constructor\n- the \"new\" statement considered harmful",
    ),
    (
        "Prototype",
        "Specify the kinds of objects to create using a cloneable instance\nand create new objects by copying this instance.",
        "- indirect creation through delegation\n- \"clone\"\n- the \"new\" statement considered harmful",
    ),
    (
        "Singleton",
        "Ensure a class only has one instance, and provide a global point of access to it.",
        "- enforces a fixed number of instances of a class\n- lazy initialization\n- global access",
    ),
    (
        "Adapter",
        "Convert the interface of a class into another interface clients expect.\nLets classes work together that couldn't otherwise because of incompatible interfaces.",
        "- wrap an existing class with a new interface\n- impedance match an old component with a new system\n- wrapper/delegate structure",
    ),
    (
        "Bridge",
        "Decouple an abstraction from its implementation so that the two can vary independently.",
        "- allows the implementation to change while the interface remains stable\n- wrapper/delegate structure\n  - wrapper is a hierarchy that publishes the interface\n  - delegate is a hierarchy that hides implementation baggage\n- insulation: handle/body, envelope/letter",
    ),
    (
        "Composite",
        "Arrange objects into tree structures to represent part-whole hierarchies.\nLets clients treat individual objects and collections of objects uniformly.",
        "- recursive composition\n- 1-to-many \"has a\" up the \"is a\" hierarchy\n- examples:\n  - file system hierarchy\n  - GUI (menus, layout managers)",
    ),
    (
        "Decorator",
        "Attach additional responsibilities to an object dynamically.  Provide\na flexible alternative to subclassing for extending functionality.",
        "- recursive composition\n- 1-to-1 \"has a\" up the \"is a\" hierarchy\n- a single core object wrapped by possibly many optional objects\n- user configuration of optional features to an existing class",
    ),
    (
        "Facade",
        "Provide a unified interface to a set of interfaces in a subsystem.\nDefines a higher-level interface that makes the subsystem easier to use.",
        "- wrap an existing system with a new interface\n- a simple entry point to a large sub-system\n- a layer of indirection that hides legacy complexity",
    ),
    (
        "Flyweight",
        "Use sharing to support large numbers of fine-grained objects efficiently.",
        "- how to design dozens of small objects that incur minimal overhead\n- instance-independent state stays in the class\n- instance-dependent state is supplied by the customer\n- a factory facilitates object reuse",
    ),
    (
        "Proxy",
        "Provide a surrogate or placeholder for another object to control access to it.",
        "- an extra level of indirection that provides additional functionality:\n  - distributed communication\n  - auditing, logging\n  - smart pointer\n- wrapper/delegate structure",
    ),
    (
        "Chain of Responsibility",
        "Avoid coupling the sender of a request to its receiver by giving more\nthan one object a chance to handle the request.  Link the receiving\nobjects and pass the request along the list until an object handles it.",
        "- recursive composition\n- 1-to-1 \"has a\" at the top of the \"is a\" hierarchy\n- object-oriented linked list",
    ),
    (
        "Command",
        "Encapsulate a request as an object, thereby letting you parameterize\nclients with different requests, queue or log requests, and support\nundoable operations.",
        "- object-oriented callback\n- a magic cookie that encapsulates a \"method invocation\"\n- \"execute\"",
    ),
    (
        "Interpreter",
        "Given a language, define a represention for its grammar along with a\nprocessor that uses the representation to parse sentences in the language.",
        "- recursive composition\n- 1-to-many \"has a\" up the \"is a\" hierarchy\n- process a grammar",
    ),
    (
        "Iterator",
        "Provide a way to access the elements of an aggregate object sequentially\nwithout exposing its underlying representation.",
        "- polymorphic traversal\n- promote to full object status the traversal of a collection",
    ),
    (
        "Mediator",
        "Define an object that encapsulates how a set of objects interact.\nPromotes loose coupling by keeping objects from referring to each\nother explicitly, and lets you vary their interaction independently.",
        "- an extra level of indirection that encapsulates the many-to-many relationships between other components\n- wrapper/delegate structure\n  - wrapper is a \"mapping\" object\n  - delegates are a network of collaborating objects\n- a politically-correct manager (or God) object",
    ),
    (
        "Memento",
        "Without violating encapsulation, capture and externalize an object's\ninternal state so that the object can be restored to this state later.",
        "- undo, rollback\n- a magic cookie that encapsulates a \"check point\" capability",
    ),
    (
        "Observer",
        "Define a one-to-many dependency between objects so that when one object\nchanges state, all its dependents are notified and updated automatically.",
        "- wrapper/delegate structure\n  - wrapper encapsulates the core business logic\n  - each delegate provides user-configurable, optional functionality\n- example:\n  - a data presentation application with graph, bar chart, pie chart, and table views",
    ),
    (
        "State",
        "Allow an object to alter its behavior when its internal state changes.\nThe object will appear to change its class.",
        "- wrapper/delegate structure\n- wrapper passes its \"this\" pointer\n- delegate collaborates with wrapper",
    ),
    (
        "Strategy",
        "Define a family of algorithms, encapsulate each one, and make them\ninterchangeable.  Lets the algorithm vary independently from clients\nthat use it.",
        "- configure choice of algorithm\n- wrapper/delegate structure\n  - the client is the wrapper\n  - the algorithm object is the delegate",
    ),
    (
        "Template Method",
        "Define the skeleton of an algorithm in an operation, deferring some\nsteps to subclasses.  Lets subclasses redefine certain steps of an\nalgorithm without changing the algorithm's structure.",
        "- configure steps of an algorithm\n- placeholders specified in base class, implemented in derived classes",
    ),
    (
        "Visitor",
        "Represent an operation to be performed on the elements of an object structure.\nLets you define a new operation without changing the classes of the elements on\nwhich it operates.",
        "- double dispatch\n- do the right thing based on the type of two objects\n- add operations to an existing hierarchy",
    ),
];

/// Builds the built-in Gang of Four catalog.
///
/// # Panics
///
/// Panics if the built-in content tables are malformed; that would be a
/// defect in this crate, not a runtime condition.
#[must_use]
pub fn catalog() -> PatternCatalog {
    let patterns = ENTRIES.iter().zip(1u32..).map(|((name, intent, highlights), n)| {
        let id = PatternId::new(n);
        let image = ImageRef::from_file(format!("images/gof{n}.jpg"))
            .expect("built-in image path is non-empty");
        Pattern::new(id, *name, *intent, *highlights, image)
            .expect("built-in pattern content is valid")
    });
    PatternCatalog::from_patterns(patterns).expect("built-in catalog is valid")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_23_patterns() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 23);
        let ids: Vec<u32> = catalog.ids().map(|id| id.value()).collect();
        assert_eq!(ids, (1..=23).collect::<Vec<u32>>());
    }

    #[test]
    fn singleton_entry_matches_source_material() {
        let catalog = catalog();
        let singleton = catalog.get(PatternId::new(5)).unwrap();
        assert_eq!(singleton.name(), "Singleton");
        assert!(singleton.intent().contains("only has one instance"));
        assert!(singleton.highlights().contains("lazy initialization"));
    }

    #[test]
    fn image_refs_follow_id_numbering() {
        let catalog = catalog();
        let visitor = catalog.get(PatternId::new(23)).unwrap();
        assert_eq!(
            visitor.image().as_path().unwrap().to_str(),
            Some("images/gof23.jpg")
        );
    }
}
